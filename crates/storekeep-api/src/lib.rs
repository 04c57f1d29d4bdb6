//! Async REST client for the storekeep retail-management API.
//!
//! This crate is the transport layer of the storekeep workspace. It owns:
//!
//! - **[`ApiClient`]** — a thin wrapper over `reqwest::Client` that joins
//!   paths onto the server base URL, injects the `Authorization: Bearer`
//!   header from the last stored token, and normalizes non-2xx responses
//!   into [`Error::Api`] with the best available human-readable message.
//!
//! - **Resource services** — one module per REST resource ([`products`],
//!   [`customers`], [`employees`], [`suppliers`], [`categories`],
//!   [`dashboard`], [`auth`]), implemented as inherent methods on the
//!   client. Services are pure request mappers: they perform the network
//!   call and return or fail, touching no local state.
//!
//! - **Wire types** ([`types`]) — strict serde schemas for every payload.
//!   A response that does not conform fails as [`Error::Deserialization`]
//!   instead of being trusted.
//!
//! State management (loading flags, pagination bookkeeping, collection
//! splicing) lives one level up in `storekeep-core`.

pub mod auth;
pub mod categories;
pub mod client;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod error;
pub mod products;
pub mod suppliers;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{Page, Pagination, RecordId};
