use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for wallpaper-changer operations
pub type Result<T> = std::result::Result<T, ChangerError>;

/// Errors that can occur while refreshing or inspecting the wallpaper
#[derive(Error, Debug)]
pub enum ChangerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The platform has no application data directory
    #[error("Could not determine the application data directory")]
    NoDataDir,

    /// Image service answered with a non-success status
    #[error("Image service error (HTTP {status}) for {url}")]
    Service { status: u16, url: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Image service URL could not be built
    #[error("Invalid image service URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON serialization error
    #[error("Failed to format output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Finished download could not be moved into the cache
    #[error("Failed to store downloaded image: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// OS wallpaper call failed
    #[error("Wallpaper error: {0}")]
    Wallpaper(String),

    /// Download failed and there is nothing cached to fall back to
    #[error("No cached wallpapers in {} to fall back to", .dir.display())]
    NoCachedWallpapers { dir: PathBuf },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChangerError {
    /// Create a service error from HTTP status and the requested URL
    pub fn service(status: u16, url: impl Into<String>) -> Self {
        Self::Service {
            status,
            url: url.into(),
        }
    }

    /// Create a wallpaper error from any displayable platform error
    pub fn wallpaper(err: impl std::fmt::Display) -> Self {
        Self::Wallpaper(err.to_string())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Config(_) | Self::Toml(_) => 2,
            Self::NoCachedWallpapers { .. } => 3,
            _ => 1,
        }
    }
}
