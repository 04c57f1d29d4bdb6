//! Wire types for the storekeep REST API.
//!
//! All types match the JSON payloads exchanged with `/api/` endpoints.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! These are strict schemas: a response missing a required field fails
//! deserialization rather than being silently trusted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Record identity ──────────────────────────────────────────────────

/// Canonical identifier for any API record.
///
/// The backend hands out numeric ids for most resources and opaque
/// string ids for a few; this wraps both behind one ergonomic type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination metadata returned by all list endpoints.
///
/// Invariant (server-maintained): `pages == ceil(total / limit)` and
/// `page` lies in `[1, pages]` once data exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    /// Current page, 1-based.
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: 10,
            pages: 0,
        }
    }
}

impl Pagination {
    /// Descriptor for an unpaginated endpoint that returned the whole
    /// collection (e.g. categories).
    pub fn single_page(count: usize) -> Self {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        Self {
            total: count,
            page: 1,
            limit: u32::try_from(count.max(1)).unwrap_or(u32::MAX),
            pages: 1,
        }
    }
}

/// Generic list envelope: `{ data: [...], pagination: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

// ── Products ─────────────────────────────────────────────────────────

/// Product record — from `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category_id: Option<RecordId>,
    /// Denormalized category name, present on list responses.
    #[serde(default)]
    pub category_name: Option<String>,
    /// One of: `active`, `inactive`, `archived`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product variant — from `GET /api/products/:id/variants`.
///
/// Owned exclusively by its parent product; fetched lazily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantResponse {
    pub id: RecordId,
    pub product_id: RecordId,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub stock: i64,
    #[serde(default)]
    pub sku: Option<String>,
}

// ── Categories ───────────────────────────────────────────────────────

/// Category record — from `GET /api/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_count: Option<u64>,
}

// ── Customers ────────────────────────────────────────────────────────

/// Customer record — from `GET /api/customers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── Employees ────────────────────────────────────────────────────────

/// Employee record — from `GET /api/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// One of: `active`, `on_leave`, `terminated`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hired_at: Option<DateTime<Utc>>,
}

// ── Suppliers ────────────────────────────────────────────────────────

/// Supplier record — from `GET /api/suppliers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── Dashboard ────────────────────────────────────────────────────────

/// Aggregate metrics — from `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewResponse {
    pub total_revenue: f64,
    pub order_count: u64,
    pub product_count: u64,
    pub customer_count: u64,
    #[serde(default)]
    pub low_stock_count: Option<u64>,
}

/// Sales target — from `GET /api/dashboard/sales-targets?period`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTargetResponse {
    pub label: String,
    pub target: f64,
    pub achieved: f64,
}

/// Activity feed entry — from `GET /api/dashboard/recent-activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: RecordId,
    pub activity_type: String,
    pub message: String,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── Auth ─────────────────────────────────────────────────────────────

/// Authenticated user identity — returned beside the token on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_id_from_numeric_string() {
        let id = RecordId::from("42".to_owned());
        assert_eq!(id.as_int(), Some(42));
    }

    #[test]
    fn record_id_from_opaque_string() {
        let id = RecordId::from("cust_8fa1".to_owned());
        assert_eq!(id.as_str(), Some("cust_8fa1"));
    }

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::Int(7).to_string(), "7");
        assert_eq!(RecordId::Str("abc".into()).to_string(), "abc");
    }

    #[test]
    fn record_id_deserializes_untagged() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[5, "x9"]"#).unwrap();
        assert_eq!(ids, vec![RecordId::Int(5), RecordId::Str("x9".into())]);
    }

    #[test]
    fn product_deserializes_with_minimal_fields() {
        let p: ProductResponse =
            serde_json::from_str(r#"{"id":1,"name":"Widget","price":9.99}"#).unwrap();
        assert_eq!(p.id, RecordId::Int(1));
        assert_eq!(p.name, "Widget");
        assert!((p.price - 9.99).abs() < f64::EPSILON);
        assert!(p.sku.is_none());
        assert!(p.status.is_none());
    }

    #[test]
    fn product_rejects_missing_required_field() {
        // Strict schema: `price` is required.
        let res = serde_json::from_str::<ProductResponse>(r#"{"id":1,"name":"Widget"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn page_envelope_roundtrip() {
        let raw = r#"{"data":[{"id":1,"name":"Widget","price":9.99}],
                      "pagination":{"total":1,"page":1,"limit":10,"pages":1}}"#;
        let page: Page<ProductResponse> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.pages, 1);
    }
}
