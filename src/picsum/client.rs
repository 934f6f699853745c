use reqwest::blocking::{Client, Response};
use url::Url;

use crate::config::Config;
use crate::error::{ChangerError, Result};
use crate::platform::Resolution;
use crate::store::WallpaperId;

const USER_AGENT: &str = concat!("wallpaper-changer/", env!("CARGO_PKG_VERSION"));

/// Client for the seeded random image service
pub struct PicsumClient {
    client: Client,
    base_url: Url,
}

impl PicsumClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.service.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ChangerError::Config(format!(
                "service.base_url is not a base URL: {base_url}"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the image seeded with `id` at `resolution`:
    /// `{base}/seed/{id}/{width}/{height}/`
    pub fn image_url(&self, id: WallpaperId, resolution: Resolution) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "seed".to_string(),
                id.to_string(),
                resolution.width.to_string(),
                resolution.height.to_string(),
                String::new(),
            ]);
        }
        url
    }

    /// Start downloading the image for `id`.
    ///
    /// The returned response has a success status; its body is read lazily
    /// so callers can stream it straight to disk.
    pub fn fetch(&self, id: WallpaperId, resolution: Resolution) -> Result<Response> {
        let url = self.image_url(id, resolution);
        tracing::info!("downloading {url}");

        let response = self.client.get(url.as_str()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChangerError::service(status.as_u16(), url.as_str()));
        }

        Ok(response)
    }
}
