// Supplier endpoints.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Page, RecordId, SupplierResponse};

/// Body of `POST /api/suppliers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ApiClient {
    /// `GET /api/suppliers?page&limit`
    pub async fn list_suppliers(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<SupplierResponse>, Error> {
        let params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        self.get_with_params("suppliers", &params).await
    }

    /// `GET /api/suppliers/:id`
    pub async fn get_supplier(&self, id: &RecordId) -> Result<SupplierResponse, Error> {
        self.get(&format!("suppliers/{id}")).await
    }

    /// `POST /api/suppliers`
    pub async fn create_supplier(&self, draft: &SupplierDraft) -> Result<SupplierResponse, Error> {
        self.post("suppliers", draft).await
    }
}
