use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use crate::location::provider::{PositionError, PositionProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{info, instrument};

/// Position provider backed by a JSON positioning endpoint, typically a local
/// GPS sidecar service on the kiosk.
#[derive(Debug)]
pub struct HttpPositionProvider {
    client: Client,
    url: String,
}

impl HttpPositionProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        HttpPositionProvider { client, url: url.into() }
    }

    /// None when the kiosk has no positioning endpoint configured.
    pub fn from_config(client: Client, config: &AppConfig) -> Option<Self> {
        config.location().map(|location| HttpPositionProvider::new(client, location.url()))
    }
}

#[async_trait]
impl PositionProvider for HttpPositionProvider {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        info!("📍 Requesting position from {}...", self.url);
        let response = self.client.get(&self.url).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PositionError::PermissionDenied),
            status if !status.is_success() => Err(PositionError::Unavailable),
            _ => {
                let coordinates = response.json::<Coordinates>().await?;
                info!("📍 Requesting position from {}... OK", self.url);
                Ok(coordinates)
            }
        }
    }
}
