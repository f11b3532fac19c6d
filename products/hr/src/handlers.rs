use std::{
    fmt,
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use platform_api::Notification;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{api::EmployeeApi, record::EmployeeForm, table::SharedTable};

/// Runs the create flow for a form submission.
pub struct CreateHandler<A> {
    api: Arc<A>,
}

impl<A: EmployeeApi> CreateHandler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// POST the current form values. The form is reset only after a 2xx;
    /// on failure it is left exactly as submitted.
    #[instrument(skip_all, fields(employee_id = %form.employee_id))]
    pub async fn submit(&self, form: &mut EmployeeForm) -> Notification {
        let record = form.to_record();
        let result = self.api.create(&record).await;
        let notification = Notification::from_result("create", &result);
        if notification.is_success() {
            info!("employee created");
            form.reset();
        }
        notification
    }
}

/// How concurrent list responses land in the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListOrdering {
    /// Whichever response resolves last wins.
    #[default]
    LastResolved,
    /// Responses older than the rows already shown are dropped.
    LatestRequested,
}

#[derive(Debug, Error)]
#[error("unknown list ordering {0:?} (expected last-resolved or latest-requested)")]
pub struct UnknownOrdering(String);

impl FromStr for ListOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-resolved" | "last_resolved" => Ok(Self::LastResolved),
            "latest-requested" | "latest_requested" => Ok(Self::LatestRequested),
            _ => Err(UnknownOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for ListOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListOrdering::LastResolved => f.write_str("last-resolved"),
            ListOrdering::LatestRequested => f.write_str("latest-requested"),
        }
    }
}

/// Runs the list flow into a shared table.
pub struct ListHandler<A> {
    api: Arc<A>,
    ordering: ListOrdering,
    next_token: AtomicU64,
}

impl<A: EmployeeApi> ListHandler<A> {
    pub fn new(api: Arc<A>, ordering: ListOrdering) -> Self {
        Self {
            api,
            ordering,
            next_token: AtomicU64::new(0),
        }
    }

    /// GET the collection and, on success, replace the table's data rows.
    /// The table is untouched until the response resolves, and untouched
    /// entirely on failure.
    #[instrument(skip_all, fields(ordering = %self.ordering))]
    pub async fn refresh(&self, table: &SharedTable) -> Notification {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.list().await;
        let notification = Notification::from_result("list", &result);
        if let Ok(records) = result {
            let mut table = table.lock().await;
            if table.apply(token, &records, self.ordering) {
                info!(token, rows = records.len(), "employee table refreshed");
            } else {
                debug!(
                    token,
                    applied = table.applied_token(),
                    "discarding stale employee list"
                );
            }
        }
        notification
    }
}
