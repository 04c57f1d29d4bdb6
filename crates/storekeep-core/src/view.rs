//! View-model derivation: pure, deterministic filtering, searching, and
//! aggregation over slice snapshots.
//!
//! Screens hold their own filter state (reset on navigation) and derive
//! the rendered list from `(items, filter_state, search_text)` on every
//! recompute. Nothing here reads or writes the store: same inputs, same
//! output. Search is case-insensitive substring match on each entity's
//! designated text fields; categorical predicates are exact-match; all
//! predicates combine with logical AND, so application order never
//! changes the result set.

use chrono::{DateTime, Utc};

use crate::model::{
    Activity, Customer, Employee, EmployeeStatus, Product, ProductStatus, RecordId, Supplier,
};

// ── Text search ──────────────────────────────────────────────────────

/// Entities searchable by the list screens' search box.
pub trait TextMatch {
    /// Whether any designated text field contains `needle_lower`
    /// (already lowercased by the caller).
    fn matches_text(&self, needle_lower: &str) -> bool;
}

fn contains_ci(field: Option<&str>, needle_lower: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle_lower))
}

impl TextMatch for Product {
    fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || contains_ci(self.sku.as_deref(), needle_lower)
    }
}

impl TextMatch for Customer {
    fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || contains_ci(self.email.as_deref(), needle_lower)
    }
}

impl TextMatch for Employee {
    fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || contains_ci(self.position.as_deref(), needle_lower)
    }
}

impl TextMatch for Supplier {
    fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || contains_ci(self.contact_name.as_deref(), needle_lower)
    }
}

/// Filter a collection by search text. Empty/whitespace text matches
/// everything.
pub fn search<'a, T: TextMatch>(items: &'a [T], search_text: &str) -> Vec<&'a T> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|i| i.matches_text(&needle)).collect()
}

// ── Product screen ───────────────────────────────────────────────────

/// Local filter state for the products screen.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub search: String,
    pub category_id: Option<RecordId>,
    pub status: Option<ProductStatus>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl ProductQuery {
    fn accepts(&self, p: &Product, needle_lower: &str) -> bool {
        (needle_lower.is_empty() || p.matches_text(needle_lower))
            && self
                .category_id
                .as_ref()
                .is_none_or(|c| p.category_id.as_ref() == Some(c))
            && self.status.is_none_or(|s| p.status == Some(s))
            && self.price_min.is_none_or(|min| p.price >= min)
            && self.price_max.is_none_or(|max| p.price <= max)
    }
}

pub fn filter_products<'a>(items: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let needle = query.search.trim().to_lowercase();
    items.iter().filter(|p| query.accepts(p, &needle)).collect()
}

/// Aggregates for the products screen, computed in one pass over the
/// filtered set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductStats {
    pub count: usize,
    pub total_stock: i64,
    /// Σ price × stock over the set.
    pub stock_value: f64,
    pub avg_price: f64,
    pub low_stock_count: usize,
}

pub fn product_stats<'a>(items: impl IntoIterator<Item = &'a Product>) -> ProductStats {
    let mut stats = ProductStats::default();
    let mut price_sum = 0.0;
    for p in items {
        stats.count += 1;
        stats.total_stock += p.stock;
        stats.stock_value += p.stock_value();
        price_sum += p.price;
        if p.is_low_stock() {
            stats.low_stock_count += 1;
        }
    }
    if stats.count > 0 {
        #[allow(clippy::cast_precision_loss)]
        {
            stats.avg_price = price_sum / stats.count as f64;
        }
    }
    stats
}

// ── Employee screen ──────────────────────────────────────────────────

/// Local filter state for the employees screen.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    pub search: String,
    pub status: Option<EmployeeStatus>,
}

pub fn filter_employees<'a>(items: &'a [Employee], query: &EmployeeQuery) -> Vec<&'a Employee> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|e| {
            (needle.is_empty() || e.matches_text(&needle))
                && query.status.is_none_or(|s| e.status == Some(s))
        })
        .collect()
}

// ── Activity feed ────────────────────────────────────────────────────

/// Local filter state for the activity feed: kind tag plus an optional
/// date range. When a range bound is set, entries without a timestamp
/// are excluded.
#[derive(Debug, Clone, Default)]
pub struct ActivityQuery {
    pub kind: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub fn filter_activity<'a>(items: &'a [Activity], query: &ActivityQuery) -> Vec<&'a Activity> {
    items
        .iter()
        .filter(|a| {
            query.kind.as_deref().is_none_or(|k| a.kind == k)
                && query
                    .from
                    .is_none_or(|from| a.occurred_at.is_some_and(|t| t >= from))
                && query
                    .to
                    .is_none_or(|to| a.occurred_at.is_some_and(|t| t <= to))
        })
        .collect()
}

// ── Local pagination ─────────────────────────────────────────────────

/// Window a locally-paginated collection: page is 1-based, a page past
/// the end is empty. `window.len() == min(limit, total - (page-1)*limit)`.
pub fn page_window<T>(items: &[T], page: u32, limit: u32) -> &[T] {
    let limit = limit as usize;
    if limit == 0 {
        return &items[..0];
    }
    let start = (page.max(1) as usize - 1) * limit;
    if start >= items.len() {
        return &items[..0];
    }
    let end = (start + limit).min(items.len());
    &items[start..end]
}
