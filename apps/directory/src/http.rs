use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::HeaderName,
    response::Html,
    routing::get,
};
use platform_api::Notification;
use products_hr::{
    CreateHandler, EmployeeApi, EmployeeForm, ListHandler, SharedTable, shared_table,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::page::directory_page;

/// Handlers plus the one table the page shows.
pub struct AppState<A> {
    pub create: Arc<CreateHandler<A>>,
    pub list: Arc<ListHandler<A>>,
    pub table: SharedTable,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            list: self.list.clone(),
            table: self.table.clone(),
        }
    }
}

impl<A: EmployeeApi> AppState<A> {
    pub fn new(create: CreateHandler<A>, list: ListHandler<A>) -> Self {
        Self {
            create: Arc::new(create),
            list: Arc::new(list),
            table: shared_table(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve<A>(config: ServeConfig, state: AppState<A>) -> anyhow::Result<()>
where
    A: EmployeeApi + 'static,
{
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "employee directory listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

pub fn build_router<A>(state: AppState<A>) -> Router
where
    A: EmployeeApi + 'static,
{
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/", get(index_handler::<A>))
        .route(
            "/employees",
            get(list_handler::<A>).post(create_handler::<A>),
        )
        .route("/healthz", get(|| async { "ok" }))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn index_handler<A: EmployeeApi>(State(state): State<AppState<A>>) -> Html<String> {
    let table = state.table.lock().await;
    Html(directory_page(&EmployeeForm::default(), &table, None).into_string())
}

async fn create_handler<A: EmployeeApi>(
    State(state): State<AppState<A>>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Html<String> {
    let mut form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable create form");
            return render(&state, &EmployeeForm::default(), Notification::Error).await;
        }
    };
    let notification = state.create.submit(&mut form).await;
    render(&state, &form, notification).await
}

async fn list_handler<A: EmployeeApi>(State(state): State<AppState<A>>) -> Html<String> {
    let notification = state.list.refresh(&state.table).await;
    render(&state, &EmployeeForm::default(), notification).await
}

async fn render<A: EmployeeApi>(
    state: &AppState<A>,
    form: &EmployeeForm,
    notification: Notification,
) -> Html<String> {
    let table = state.table.lock().await;
    Html(directory_page(form, &table, Some(notification)).into_string())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
    info!("shutdown signal received");
}
