// Customer endpoints.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, push_str_param};
use crate::error::Error;
use crate::types::{CustomerResponse, Page};

/// Body of `POST /api/customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ApiClient {
    /// `GET /api/customers?page&limit&search`
    pub async fn list_customers(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<Page<CustomerResponse>, Error> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        push_str_param(&mut params, "search", search);
        self.get_with_params("customers", &params).await
    }

    /// `POST /api/customers`
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<CustomerResponse, Error> {
        self.post("customers", draft).await
    }
}
