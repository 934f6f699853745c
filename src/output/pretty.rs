use colored::Colorize;

use crate::app::{Startup, Status};
use crate::refresh::{Choice, Refreshed};
use crate::store::{CacheStatus, CachedImage, WallpaperId};

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Local fetch time of an id, or the raw id when it's out of range
fn fetched_display(id: WallpaperId) -> String {
    id.fetched_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Format the result of a refresh
pub fn format_refreshed(refreshed: &Refreshed) -> String {
    let mut output = String::new();

    match &refreshed.choice {
        Choice::Fresh { .. } => {
            output.push_str(&format!("{} New wallpaper set\n", "✓".green()));
        }
        Choice::Fallback { cause, .. } => {
            output.push_str(&format!(
                "{} Download failed, using a cached wallpaper\n",
                "!".yellow().bold()
            ));
            output.push_str(&format!("  {} {}\n", "Reason:".cyan(), cause.dimmed()));
        }
    }

    output.push_str(&format!("  {} {}\n", "Path:".cyan(), refreshed.path.display()));
    output.push_str(&format!(
        "  {} {}\n",
        "Fetched:".cyan(),
        fetched_display(refreshed.choice.id())
    ));
    output.push_str(&format!(
        "  {} {}",
        "Requested size:".cyan(),
        refreshed.resolution
    ));

    output
}

/// Format the startup check outcome
pub fn format_startup(startup: &Startup) -> String {
    match startup {
        Startup::AlreadyFresh { current } => format!(
            "{} Wallpaper is already from today\n  {} {}",
            "✓".green(),
            "Path:".cyan(),
            current
        ),
        Startup::Refreshed(refreshed) => format_refreshed(refreshed),
    }
}

/// Format the status report
pub fn format_status(status: &Status) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Wallpaper Status".bold()));
    output.push_str(&"─".repeat(50));
    output.push('\n');

    let current = status
        .current
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| "(unknown)".dimmed().to_string());
    output.push_str(&format!("{} {}\n", "Current:".cyan(), current));

    let freshness = if status.fresh {
        "fresh (set today)".green()
    } else {
        "stale".yellow()
    };
    output.push_str(&format!("{} {}\n\n", "Freshness:".cyan(), freshness));

    output.push_str(&format_cache_status(&status.cache, &status.cache_dir.display().to_string()));
    output
}

/// Format the cache summary
pub fn format_cache_status(cache: &CacheStatus, location: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Cache Status".bold()));
    output.push_str(&format!("Location: {}\n", location));

    if !cache.exists || cache.count == 0 {
        output.push_str(&format!("  {}\n", "No cached wallpapers".dimmed()));
        return output;
    }

    output.push_str(&format!("  Images: {}\n", cache.count));
    output.push_str(&format!("  Size: {}\n", format_bytes(cache.total_bytes)));
    if let Some(newest) = cache.newest {
        output.push_str(&format!("  Newest: {}\n", fetched_display(newest)));
    }
    if let Some(oldest) = cache.oldest {
        output.push_str(&format!("  Oldest: {}\n", fetched_display(oldest)));
    }

    output
}

/// Format the list of cached images
pub fn format_cached(images: &[CachedImage]) -> String {
    if images.is_empty() {
        return "No cached wallpapers.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "Cached Wallpapers".bold()));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for image in images {
        output.push_str(&format!(
            "{:<15} {:20} {:>10}\n",
            image.id.to_string().bold(),
            fetched_display(image.id),
            format_bytes(image.bytes).dimmed()
        ));
    }

    output
}
