//! Pushover push notifications
//!
//! Sends one short message per event through the Pushover messages API.
//! A backend that is unreachable or rejects the request is fatal.

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::PushoverConfig;
use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

pub const DEFAULT_TITLE: &str = "Laundry Notifier";

#[derive(Debug, Clone)]
pub struct Pushover {
    client: Client,
    config: PushoverConfig,
    endpoint: String,
}

impl Pushover {
    pub fn new(config: PushoverConfig) -> Self {
        Self::with_endpoint(config, DEFAULT_ENDPOINT)
    }

    /// Same as [`Pushover::new`] but against a custom messages endpoint.
    pub fn with_endpoint(config: PushoverConfig, endpoint: impl ToString) -> Self {
        Self {
            client: Client::new(),
            config,
            endpoint: endpoint.to_string(),
        }
    }

    /// Send exactly one push message.
    #[instrument(skip(self))]
    pub async fn notify(&self, message: &str, title: &str) -> Result<()> {
        let params = [
            ("token", self.config.key.as_str()),
            ("user", self.config.user.as_str()),
            ("message", message),
            ("title", title),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Notification(format!("failed to reach push backend: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Notification(format!(
                "push backend rejected message: {status}"
            )));
        }

        debug!("sent push notification: {message}");
        Ok(())
    }
}
