//! Cache inspection commands

use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::error::Result;
use crate::output;
use crate::store::ImageStore;

/// Handle cache commands
pub fn cache(store: &ImageStore, args: &CacheArgs, format: OutputFormat) -> Result<String> {
    match &args.command {
        CacheCommands::Status => status(store, format),
        CacheCommands::List => list(store, format),
        CacheCommands::Path => path(store, format),
    }
}

fn status(store: &ImageStore, format: OutputFormat) -> Result<String> {
    let status = store.status()?;
    output::format_cache_status(&status, &store.dir().display().to_string(), format)
}

fn list(store: &ImageStore, format: OutputFormat) -> Result<String> {
    let images = store.entries()?;
    output::format_cached(&images, format)
}

fn path(store: &ImageStore, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(store.dir().display().to_string()),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "cache_dir": store.dir().to_string_lossy(),
                "exists": store.dir().is_dir(),
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}
