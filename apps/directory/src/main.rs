mod config;
mod http;
mod page;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use platform_api::{Endpoint, Notification};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{
    CreateHandler, EmployeeForm, HttpEmployeeApi, ListHandler, ListOrdering, render, shared_table,
    wire,
};
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(
    name = "employee-directory",
    version,
    about = "Create and list employees against the HR API"
)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ApiArgs {
    /// Base URL of the employee API (overrides EMPLOYEE_API_ENDPOINT).
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<Endpoint>,
    /// Request timeout in seconds (overrides EMPLOYEE_API_TIMEOUT_SECS).
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,
    /// How concurrent list responses land in the table.
    #[arg(long, global = true, value_name = "ORDERING")]
    ordering: Option<ListOrdering>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a new employee record.
    Create(CreateCommand),
    /// Fetch every employee and print the table.
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve the employee form and table over HTTP.
    Serve(ServeCommand),
}

#[derive(Args, Debug)]
struct CreateCommand {
    #[arg(long = "id")]
    employee_id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    phone: String,
}

impl From<CreateCommand> for EmployeeForm {
    fn from(value: CreateCommand) -> Self {
        EmployeeForm {
            employee_id: value.employee_id,
            name: value.name,
            email: value.email,
            address: value.address,
            phone: value.phone,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "127.0.0.1")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing(ObsConfig::for_service("employee-directory"))?;
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_overrides(
        cli.api.endpoint,
        cli.api.timeout_secs,
        cli.api.ordering,
    )?;
    let api = Arc::new(
        HttpEmployeeApi::new(config.endpoint.clone(), &config.transport())
            .context("failed to build HTTP client")?,
    );
    info!(endpoint = %api.endpoint(), ordering = %config.ordering, "employee API configured");

    match cli.command {
        Command::Create(cmd) => Ok(run_create(api, cmd.into()).await),
        Command::List { format } => run_list(api, config.ordering, format).await,
        Command::Serve(cmd) => {
            let state = AppState::new(
                CreateHandler::new(api.clone()),
                ListHandler::new(api, config.ordering),
            );
            http::serve(cmd.into(), state).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_create(api: Arc<HttpEmployeeApi>, mut form: EmployeeForm) -> ExitCode {
    let notification = CreateHandler::new(api).submit(&mut form).await;
    println!("{notification}");
    exit_code(notification)
}

async fn run_list(
    api: Arc<HttpEmployeeApi>,
    ordering: ListOrdering,
    format: OutputFormat,
) -> Result<ExitCode> {
    let table = shared_table();
    let handler = ListHandler::new(api, ordering);
    let notification = handler.refresh(&table).await;
    if !notification.is_success() {
        println!("{notification}");
        return Ok(exit_code(notification));
    }

    let table = table.lock().await;
    match format {
        OutputFormat::Text => print!("{}", render::text_table(&table)),
        OutputFormat::Html => println!("{}", render::table_html(&table).into_string()),
        OutputFormat::Json => println!(
            "{}",
            wire::encode_records_pretty(&table.records()).context("failed to encode records")?
        ),
    }
    Ok(exit_code(notification))
}

fn exit_code(notification: Notification) -> ExitCode {
    if notification.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_flags_map_to_form_fields() {
        let cli = Cli::try_parse_from([
            "employee-directory",
            "create",
            "--id",
            "1",
            "--name",
            "Ana",
            "--email",
            "a@x.com",
            "--address",
            "Rd 1",
            "--phone",
            "555",
        ])
        .unwrap();
        let Command::Create(cmd) = cli.command else {
            panic!("expected create command");
        };
        let form = EmployeeForm::from(cmd);
        assert_eq!(form.employee_id, "1");
        assert_eq!(form.address, "Rd 1");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "employee-directory",
            "list",
            "--format",
            "json",
            "--endpoint",
            "http://localhost:9000/v1",
            "--ordering",
            "latest-requested",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::List { format: OutputFormat::Json }));
        assert_eq!(cli.api.endpoint.unwrap().url().port(), Some(9000));
        assert_eq!(cli.api.ordering, Some(ListOrdering::LatestRequested));
    }

    #[test]
    fn bad_endpoint_flag_is_rejected() {
        let err = Cli::try_parse_from(["employee-directory", "list", "--endpoint", "nope"]);
        assert!(err.is_err());
    }
}
