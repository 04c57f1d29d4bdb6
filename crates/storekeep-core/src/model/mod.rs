//! Canonical domain types for the storekeep workspace.
//!
//! Wire payloads from `storekeep-api` are converted into these types at
//! the dispatch boundary (see [`crate::convert`]); everything above the
//! transport — state containers, view models, the CLI — speaks only the
//! domain vocabulary defined here.

pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod product;
pub mod supplier;

pub use customer::Customer;
pub use dashboard::{Activity, DashboardOverview, SalesTarget};
pub use employee::{Employee, EmployeeStatus};
pub use product::{Category, Product, ProductStatus, ProductVariant};
pub use supplier::Supplier;

// The id type is defined at the wire layer (it is the wire shape) and
// is canonical across the workspace.
pub use storekeep_api::types::RecordId;

use serde::{Deserialize, Serialize};

/// A record that carries a stable identifier, unique within its
/// collection. The state containers splice by this id.
pub trait Record {
    fn record_id(&self) -> &RecordId;
}

/// The authenticated user, returned beside the token on login and held
/// in the store for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}
