use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{self as sdk, Resource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    pub otlp_endpoint: Option<String>,
}

impl ObsConfig {
    pub fn for_service(service_name: &'static str) -> Self {
        Self {
            service_name,
            env_filter: None,
            otlp_endpoint: None,
        }
    }
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self::for_service("employee-directory")
    }
}

/// Explicit filter first, then `RUST_LOG`, then the default.
fn resolve_filter(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .or(from_env)
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Explicit endpoint first, then `OTLP_ENDPOINT`. Blank values disable export.
fn resolve_otlp_endpoint(explicit: Option<String>, from_env: Option<String>) -> Option<String> {
    explicit
        .or(from_env)
        .map(|endpoint| endpoint.trim().to_string())
        .filter(|endpoint| !endpoint.is_empty())
}

/// Install tracing subscribers with optional OTLP exporter. Log lines go to
/// stderr so command output on stdout stays clean.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());
    let env_filter = EnvFilter::try_new(filter)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    let otlp_endpoint =
        resolve_otlp_endpoint(config.otlp_endpoint, std::env::var("OTLP_ENDPOINT").ok());

    if let Some(endpoint) = otlp_endpoint {
        let exporter = SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(endpoint)
            .build()?;

        let resource = Resource::builder()
            .with_service_name(config.service_name)
            .build();

        let provider = sdk::trace::SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();
        let tracer = provider.tracer(config.service_name);

        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;
    } else {
        registry.try_init()?;
    }

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    Ok(())
}
