use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    config::HttpWitnessConfig,
    witness::{
        error::{WitnessError, invalid_config, invalid_response, transport_error},
        ports::WitnessPort,
    },
};

/// Non-streaming completion against an Ollama-style `/api/generate`
/// endpoint. One request per run; the pipeline never blocks on it.
#[derive(Debug)]
pub struct HttpWitness {
    client: Client,
    base_url: String,
    model: String,
}

impl HttpWitness {
    pub fn new(config: &HttpWitnessConfig) -> Result<Self, WitnessError> {
        if config.base_url.trim().is_empty() {
            return Err(invalid_config("witness base_url cannot be empty"));
        }
        if config.model.trim().is_empty() {
            return Err(invalid_config("witness model cannot be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()
            .map_err(|err| transport_error(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl WitnessPort for HttpWitness {
    async fn speak(&self, briefing: &str) -> Result<String, WitnessError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = json!({
            "model": self.model,
            "prompt": briefing,
            "stream": false,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error(format!("witness request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(format!(
                "witness backend returned status {status}"
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| invalid_response(format!("witness response is not JSON: {err}")))?;

        payload
            .get("response")
            .and_then(|value| value.as_str())
            .map(|text| text.to_string())
            .ok_or_else(|| invalid_response("witness response missing 'response' text field"))
    }
}
