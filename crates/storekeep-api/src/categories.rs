// Category endpoints. Categories are reference data: the list endpoint
// returns the full set with no pagination envelope.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::CategoryResponse;

/// Body of `POST /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    /// `GET /api/categories`
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, Error> {
        self.get("categories").await
    }

    /// `POST /api/categories`
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<CategoryResponse, Error> {
        self.post("categories", draft).await
    }
}
