// Employee endpoints.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, push_str_param};
use crate::error::Error;
use crate::types::{EmployeeResponse, Page, RecordId};

/// Body of `POST /api/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `PUT /api/employees/:id`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiClient {
    /// `GET /api/employees?page&limit&search`
    pub async fn list_employees(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<Page<EmployeeResponse>, Error> {
        let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
        push_str_param(&mut params, "search", search);
        self.get_with_params("employees", &params).await
    }

    /// `POST /api/employees`
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<EmployeeResponse, Error> {
        self.post("employees", draft).await
    }

    /// `PUT /api/employees/:id`
    pub async fn update_employee(
        &self,
        id: &RecordId,
        patch: &EmployeePatch,
    ) -> Result<EmployeeResponse, Error> {
        self.put(&format!("employees/{id}"), patch).await
    }

    /// `DELETE /api/employees/:id`
    pub async fn delete_employee(&self, id: &RecordId) -> Result<(), Error> {
        self.delete(&format!("employees/{id}")).await
    }
}
