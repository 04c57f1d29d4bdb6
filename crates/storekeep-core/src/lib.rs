//! State layer between `storekeep-api` and UI consumers.
//!
//! This crate owns the business logic, domain model, and state
//! containers for the storekeep workspace:
//!
//! - **[`AppStore`]** — one slice per resource (products, categories,
//!   customers, employees, suppliers, dashboard) plus the lazily-loaded
//!   product-variant cache and the session user. Created at process
//!   start and passed explicitly to dispatchers; torn down at exit.
//!
//! - **[`Dispatcher`]** — the action layer. Every operation runs as an
//!   async action with pending/fulfilled/rejected phases: mark the slice
//!   loading, await the service call, commit the settled result through
//!   the reducer. Errors are captured into slice state at this boundary
//!   and never reach rendering code.
//!
//! - **Slices** ([`store`]) — `ResourceState<T>` reduced over typed
//!   [`SliceCommand`]s, observable through `watch` channels. Fetch
//!   settlements carry a monotonic sequence number so an out-of-order
//!   response cannot overwrite newer data.
//!
//! - **View models** ([`view`]) — pure per-screen derivation: search,
//!   categorical filters (AND-combined), aggregates in a single pass,
//!   and local page windowing.
//!
//! - **Domain model** ([`model`]) — canonical types converted from the
//!   wire schemas at the dispatch boundary.

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
pub mod view;

/// Request payloads, defined at the wire layer and re-exported so
/// consumers depend only on the core vocabulary.
pub mod requests {
    pub use storekeep_api::categories::CategoryDraft;
    pub use storekeep_api::customers::CustomerDraft;
    pub use storekeep_api::employees::{EmployeeDraft, EmployeePatch};
    pub use storekeep_api::products::{ProductDraft, ProductFilter, ProductPatch, VariantDraft};
    pub use storekeep_api::suppliers::SupplierDraft;
}

// The transport layer types a consumer needs to stand up a client.
pub use storekeep_api::{ApiClient, TransportConfig};

// ── Primary re-exports ──────────────────────────────────────────────
pub use dispatch::{BatchOutcome, BatchStatus, Dispatcher, LoginOutcome};
pub use error::CoreError;
pub use store::{
    AppStore, DashboardCommand, DashboardSlice, DashboardState, RequestStatus, ResourceState,
    Slice, SliceCommand,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Activity, Category, Customer, DashboardOverview, Employee, EmployeeStatus, Product,
    ProductStatus, ProductVariant, Record, RecordId, SalesTarget, Supplier, User,
};
