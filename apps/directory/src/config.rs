use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use platform_api::{Endpoint, TransportSettings};
use products_hr::ListOrdering;

/// Stage URL of the managed employee API.
pub const DEFAULT_ENDPOINT: &str = "https://yl7ealf6a8.execute-api.eu-north-1.amazonaws.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    pub timeout: Duration,
    pub ordering: ListOrdering,
}

impl AppConfig {
    /// Read `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup("EMPLOYEE_API_ENDPOINT")
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let endpoint = Endpoint::parse(&endpoint).context("invalid EMPLOYEE_API_ENDPOINT")?;

        let timeout_secs = match lookup("EMPLOYEE_API_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw).context("invalid EMPLOYEE_API_TIMEOUT_SECS")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let ordering = match lookup("EMPLOYEE_LIST_ORDERING") {
            Some(raw) => raw
                .parse::<ListOrdering>()
                .context("invalid EMPLOYEE_LIST_ORDERING")?,
            None => ListOrdering::default(),
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            ordering,
        })
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(
        mut self,
        endpoint: Option<Endpoint>,
        timeout_secs: Option<u64>,
        ordering: Option<ListOrdering>,
    ) -> Result<Self> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(non_zero(secs)?);
        }
        if let Some(ordering) = ordering {
            self.ordering = ordering;
        }
        Ok(self)
    }

    pub fn transport(&self) -> TransportSettings {
        TransportSettings {
            timeout: self.timeout,
        }
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{raw:?} is not a number of seconds"))?;
    non_zero(secs)
}

fn non_zero(secs: u64) -> Result<u64> {
    if secs == 0 {
        return Err(anyhow!("timeout must be greater than zero"));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_the_stage_url() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.endpoint.to_string(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.ordering, ListOrdering::LastResolved);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("EMPLOYEE_API_ENDPOINT", "http://localhost:9000/v2"),
            ("EMPLOYEE_API_TIMEOUT_SECS", "5"),
            ("EMPLOYEE_LIST_ORDERING", "latest-requested"),
        ])
        .unwrap();
        assert_eq!(config.endpoint.url().path(), "/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.ordering, ListOrdering::LatestRequested);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("EMPLOYEE_API_ENDPOINT", "mailto:hr@x.com")]).is_err());
        assert!(config_from(&[("EMPLOYEE_API_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("EMPLOYEE_API_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("EMPLOYEE_LIST_ORDERING", "random")]).is_err());
    }

    #[test]
    fn flags_win_over_environment() {
        let config = config_from(&[("EMPLOYEE_API_TIMEOUT_SECS", "5")])
            .unwrap()
            .with_overrides(
                Some(Endpoint::parse("http://127.0.0.1:8081").unwrap()),
                Some(2),
                Some(ListOrdering::LatestRequested),
            )
            .unwrap();
        assert_eq!(config.endpoint.url().port(), Some(8081));
        assert_eq!(config.transport().timeout, Duration::from_secs(2));
        assert_eq!(config.ordering, ListOrdering::LatestRequested);
    }
}
