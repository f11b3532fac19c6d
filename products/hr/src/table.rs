use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{handlers::ListOrdering, record::EmployeeRecord};

/// Column titles of the single header row.
pub const HEADER: [&str; 6] = ["Employee ID", "Name", "Email", "Address", "Phone", "Actions"];

/// Per-row affordance. Rendered but never wired to a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Delete => "Delete",
        }
    }

    /// Fragment the page links to for this action.
    pub fn target(self) -> &'static str {
        match self {
            RowAction::Delete => "#deleteEmployeeModal",
        }
    }
}

/// Structured rendering of one record: five text cells in column order plus
/// the action cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeRow {
    pub cells: [String; 5],
    pub action: RowAction,
}

impl From<&EmployeeRecord> for EmployeeRow {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            cells: [
                record.employee_id.clone(),
                record.name.clone(),
                record.email.clone(),
                record.address.clone(),
                record.phone.clone(),
            ],
            action: RowAction::Delete,
        }
    }
}

impl EmployeeRow {
    pub fn to_record(&self) -> EmployeeRecord {
        let [employee_id, name, email, address, phone] = self.cells.clone();
        EmployeeRecord {
            employee_id,
            name,
            email,
            address,
            phone,
        }
    }
}

/// The employee table: one fixed header row followed by data rows.
///
/// `applied_token` is the request token of the list response currently
/// shown; zero means no response has been applied yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeTable {
    rows: Vec<EmployeeRow>,
    applied_token: u64,
}

pub type SharedTable = Arc<Mutex<EmployeeTable>>;

pub fn shared_table() -> SharedTable {
    Arc::new(Mutex::new(EmployeeTable::default()))
}

impl EmployeeTable {
    pub fn header(&self) -> &'static [&'static str; 6] {
        &HEADER
    }

    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }

    /// Data rows only.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data rows plus the header row.
    pub fn total_rows(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn applied_token(&self) -> u64 {
        self.applied_token
    }

    pub fn records(&self) -> Vec<EmployeeRecord> {
        self.rows.iter().map(EmployeeRow::to_record).collect()
    }

    /// Drop every data row, keep the header, append one row per record in
    /// the given order.
    pub fn replace_rows(&mut self, records: &[EmployeeRecord]) {
        self.rows.clear();
        self.rows.extend(records.iter().map(EmployeeRow::from));
    }

    /// Apply a resolved list response. Returns `false` when the response is
    /// discarded as stale, which only happens under
    /// [`ListOrdering::LatestRequested`].
    pub fn apply(&mut self, token: u64, records: &[EmployeeRecord], ordering: ListOrdering) -> bool {
        if ordering == ListOrdering::LatestRequested && token < self.applied_token {
            return false;
        }
        self.replace_rows(records);
        self.applied_token = self.applied_token.max(token);
        true
    }
}
