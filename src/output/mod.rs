pub mod json;
pub mod pretty;

use crate::app::{Startup, Status};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::refresh::Refreshed;
use crate::store::{CacheStatus, CachedImage};

/// Format the result of a refresh based on output format
pub fn format_refreshed(refreshed: &Refreshed, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_refreshed(refreshed)),
        OutputFormat::Json => json::format_json(refreshed),
    }
}

/// Format the startup check based on output format
pub fn format_startup(startup: &Startup, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_startup(startup)),
        OutputFormat::Json => json::format_json(startup),
    }
}

/// Format the status report based on output format
pub fn format_status(status: &Status, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_status(status)),
        OutputFormat::Json => json::format_json(status),
    }
}

/// Format the cache summary based on output format
pub fn format_cache_status(
    cache: &CacheStatus,
    location: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cache_status(cache, location)
            .trim_end()
            .to_string()),
        OutputFormat::Json => json::format_json(&serde_json::json!({
            "cache_dir": location,
            "exists": cache.exists,
            "count": cache.count,
            "total_bytes": cache.total_bytes,
            "newest": cache.newest,
            "oldest": cache.oldest,
        })),
    }
}

/// Format the cached image list based on output format
pub fn format_cached(images: &[CachedImage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cached(images)),
        OutputFormat::Json => json::format_json(images),
    }
}
