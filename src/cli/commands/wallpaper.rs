//! One-shot wallpaper commands

use crate::app::App;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::output;

/// Refresh only when the current wallpaper isn't from today
pub fn check(app: &App, format: OutputFormat) -> Result<String> {
    let startup = app.check()?;
    output::format_startup(&startup, format)
}

/// Refresh unconditionally
pub fn refresh(app: &App, format: OutputFormat) -> Result<String> {
    let refreshed = app.refresh()?;
    output::format_refreshed(&refreshed, format)
}

/// Show the current wallpaper and cache
pub fn status(app: &App, format: OutputFormat) -> Result<String> {
    let status = app.status()?;
    output::format_status(&status, format)
}
