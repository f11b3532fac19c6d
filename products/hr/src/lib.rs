//! HR vertical slice: the employee directory.
//!
//! Records are created and listed against one external REST endpoint. The
//! crate keeps the pure parts (wire format, row model, rendering) apart from
//! the handlers that talk to the network.

pub mod api;
pub mod handlers;
pub mod record;
pub mod render;
pub mod table;
pub mod wire;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use handlers::{CreateHandler, ListHandler, ListOrdering, UnknownOrdering};
pub use record::{EmployeeForm, EmployeeRecord};
pub use table::{EmployeeRow, EmployeeTable, HEADER, RowAction, SharedTable, shared_table};
