//! Appliance API client
//!
//! Issues a single authenticated read of the laundry room status and maps
//! the raw provider fields into [`MachineRecord`]s. Any non-200 response
//! or unparseable body is fatal; there is no retry.

use reqwest::Client;
use tracing::{debug, trace};

use crate::config::MieleConfig;
use crate::error::{Error, Result};
use crate::{MachineRecord, MachineStatesBody};

#[derive(Debug, Clone)]
pub struct MieleClient {
    /// HTTP client, reused across requests
    client: Client,
    config: MieleConfig,
}

impl MieleClient {
    pub fn new(config: MieleConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the current machine fleet and normalize every entry.
    pub async fn fetch_machines(&self) -> Result<Vec<MachineRecord>> {
        trace!("{}: requesting machine states", self.config.url);

        let response = self
            .client
            .get(&self.config.url)
            .header("Authorization", &self.config.auth)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(Error::Upstream(format!("wrong status: {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Upstream(format!("error during decode: {e}")))?;

        let body = serde_json::from_str::<MachineStatesBody>(&body)
            .map_err(|e| Error::Upstream(format!("unparseable machine states: {e}")))?;

        debug!("received {} machine states", body.machine_states.len());

        Ok(body
            .machine_states
            .into_iter()
            .map(MachineRecord::from)
            .collect())
    }
}
