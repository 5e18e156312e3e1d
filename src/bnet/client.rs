use super::types::TokenPayload;
use crate::{Error, Result, config::BnetConfig};
use tracing::{debug, info};

/// Client for the bnet controller's token-insertion endpoint.
pub struct BnetClient {
    base_url: String,
    http: reqwest::Client,
}

impl BnetClient {
    pub fn new(config: &BnetConfig) -> Self {
        Self::with_base_url(format!("http://{}:{}", config.host, config.port))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Posts a token to bnet. Any non-2xx response is an error; callers that
    /// register at startup treat it as fatal.
    pub async fn add_token(&self, payload: &TokenPayload) -> Result<()> {
        let url = format!("{}/add_token", self.base_url);
        debug!("Posting token to {}", url);

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();

        if status.is_success() {
            info!(
                "Token accepted at place \"{}\" (status: {})",
                payload.place_id, status
            );
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Registration {
                status: status.as_u16(),
                body,
            })
        }
    }
}
