// Product endpoints: paginated list with filters, CRUD, and the
// lazily-fetched per-product variant sub-collection.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, push_param, push_str_param};
use crate::error::Error;
use crate::types::{Page, ProductResponse, RecordId, VariantResponse};

/// Server-side filter for `GET /api/products`.
///
/// Absent fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring match on name/SKU (server-side).
    pub search: Option<String>,
    pub category_id: Option<RecordId>,
    pub status: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl ProductFilter {
    pub(crate) fn query_params(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        push_str_param(&mut params, "search", self.search.as_deref());
        push_param(&mut params, "categoryId", self.category_id.as_ref());
        push_str_param(&mut params, "status", self.status.as_deref());
        push_param(&mut params, "priceMin", self.price_min);
        push_param(&mut params, "priceMax", self.price_max);
        params
    }
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `PUT /api/products/:id`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `POST /api/products/:id/variants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl ApiClient {
    /// `GET /api/products?page&limit&search&categoryId&status&priceMin&priceMax`
    pub async fn list_products(
        &self,
        page: u32,
        limit: u32,
        filter: &ProductFilter,
    ) -> Result<Page<ProductResponse>, Error> {
        self.get_with_params("products", &filter.query_params(page, limit))
            .await
    }

    /// `GET /api/products/:id`
    pub async fn get_product(&self, id: &RecordId) -> Result<ProductResponse, Error> {
        self.get(&format!("products/{id}")).await
    }

    /// `POST /api/products`
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<ProductResponse, Error> {
        self.post("products", draft).await
    }

    /// `PUT /api/products/:id`
    pub async fn update_product(
        &self,
        id: &RecordId,
        patch: &ProductPatch,
    ) -> Result<ProductResponse, Error> {
        self.put(&format!("products/{id}"), patch).await
    }

    /// `DELETE /api/products/:id`
    pub async fn delete_product(&self, id: &RecordId) -> Result<(), Error> {
        self.delete(&format!("products/{id}")).await
    }

    /// `GET /api/products/:id/variants` — the lazily-loaded child collection.
    pub async fn list_variants(&self, product_id: &RecordId) -> Result<Vec<VariantResponse>, Error> {
        self.get(&format!("products/{product_id}/variants")).await
    }

    /// `POST /api/products/:id/variants`
    pub async fn create_variant(
        &self,
        product_id: &RecordId,
        draft: &VariantDraft,
    ) -> Result<VariantResponse, Error> {
        self.post(&format!("products/{product_id}/variants"), draft)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filter_fields_are_omitted() {
        let filter = ProductFilter {
            search: Some(String::new()),
            ..ProductFilter::default()
        };
        let params = filter.query_params(1, 10);
        // Empty search string is dropped, not sent as `search=`.
        assert_eq!(
            params,
            vec![("page", "1".to_owned()), ("limit", "10".to_owned())]
        );
    }

    #[test]
    fn set_filter_fields_serialize_camel_case() {
        let filter = ProductFilter {
            search: Some("widget".into()),
            category_id: Some(RecordId::Int(3)),
            status: Some("active".into()),
            price_min: Some(1.5),
            price_max: None,
        };
        let params = filter.query_params(2, 25);
        assert!(params.contains(&("categoryId", "3".to_owned())));
        assert!(params.contains(&("priceMin", "1.5".to_owned())));
        assert!(!params.iter().any(|(k, _)| *k == "priceMax"));
    }
}
