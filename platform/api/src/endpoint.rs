use std::{fmt, str::FromStr};

use url::Url;

use crate::{ApiError, ApiResult};

/// The single base URL a client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn parse(raw: &str) -> ApiResult<Self> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed)
            .map_err(|err| ApiError::InvalidEndpoint(format!("{trimmed}: {err}")))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::InvalidEndpoint(format!(
                    "{trimmed}: unsupported scheme {other}"
                )));
            }
        }
        if url.host_str().is_none() {
            return Err(ApiError::InvalidEndpoint(format!("{trimmed}: missing host")));
        }
        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
