use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use tracing::debug;

use crate::{ApiError, ApiResult, Endpoint};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Clone, Debug)]
pub struct TransportSettings {
    pub timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// JSON-over-HTTP against a single endpoint. Bodies travel as already
/// encoded bytes so callers own their wire format.
#[derive(Clone, Debug)]
pub struct JsonTransport {
    client: Client,
    endpoint: Endpoint,
}

impl JsonTransport {
    pub fn new(endpoint: Endpoint, settings: &TransportSettings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// POST a JSON body. Any 2xx counts as success and the response body is
    /// ignored.
    pub async fn post_json(&self, body: Vec<u8>) -> ApiResult<()> {
        let response = self
            .client
            .post(self.endpoint.url().clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = ensure_success(response.status())?;
        debug!(%status, endpoint = %self.endpoint, "POST completed");
        Ok(())
    }

    /// GET the endpoint and hand back the raw body of a 2xx response.
    pub async fn get_json(&self) -> ApiResult<Vec<u8>> {
        let response = self
            .client
            .get(self.endpoint.url().clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = ensure_success(response.status())?;
        let body = response.bytes().await.map_err(ApiError::Transport)?;
        debug!(%status, bytes = body.len(), endpoint = %self.endpoint, "GET completed");
        Ok(body.to_vec())
    }
}

fn ensure_success(status: StatusCode) -> ApiResult<StatusCode> {
    if status.is_success() {
        Ok(status)
    } else {
        Err(ApiError::Status(status))
    }
}
