// ── Product domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// Product lifecycle status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Archived,
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<RecordId>,
    pub category_name: Option<String>,
    pub status: Option<ProductStatus>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Total value of stock on hand.
    pub fn stock_value(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        {
            self.price * self.stock as f64
        }
    }

    /// Whether the product counts as low-stock for the overview screens.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= 5
    }
}

impl Record for Product {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// A size/color variant of a product.
///
/// Owned exclusively by its parent product; lives in the store's
/// per-product detail cache, never in the main collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: RecordId,
    pub product_id: RecordId,
    pub size: Option<String>,
    pub color: Option<String>,
    pub stock: i64,
    pub sku: Option<String>,
}

/// A product category (reference data for filters and forms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub product_count: Option<u64>,
}

impl Record for Category {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase() {
        let s: ProductStatus = "active".parse().unwrap();
        assert_eq!(s, ProductStatus::Active);
        assert_eq!(s.to_string(), "active");
    }

    #[test]
    fn stock_value_multiplies_price_by_count() {
        let p = Product {
            id: RecordId::Int(1),
            name: "Mug".into(),
            sku: None,
            description: None,
            price: 4.0,
            stock: 3,
            category_id: None,
            category_name: None,
            status: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        };
        assert!((p.stock_value() - 12.0).abs() < f64::EPSILON);
    }
}
