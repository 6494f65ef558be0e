//! Employee domain — employee models and request parameters.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::query::QueryParams;

// ─── EmployeeStatus ──────────────────────────────────────────────────────────

/// Employee account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// An employee of the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub authorized_location_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ─── Request parameters ──────────────────────────────────────────────────────

/// Request body for [`client::Employees::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEmployeeParams {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<String>,
}

/// Request body for [`client::Employees::update`]. Omitted fields are
/// left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEmployeeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<String>,
}

/// Query parameters for [`client::Employees::list`].
///
/// All values are strings, matching the wire format; empty fields are
/// omitted from the query string. Timestamps are ISO 8601.
#[derive(Debug, Clone, Default)]
pub struct ListEmployeesParams {
    /// `ASC` or `DESC`, by `created_at`.
    pub order: String,
    pub begin_updated_at: String,
    pub end_updated_at: String,
    pub begin_created_at: String,
    pub end_created_at: String,
    /// `ACTIVE` or `INACTIVE`.
    pub status: String,
    pub external_id: String,
    pub limit: String,
}

impl QueryParams for ListEmployeesParams {
    fn pairs(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("order", Value::from(self.order.clone())),
            ("begin_updated_at", Value::from(self.begin_updated_at.clone())),
            ("end_updated_at", Value::from(self.end_updated_at.clone())),
            ("begin_created_at", Value::from(self.begin_created_at.clone())),
            ("end_created_at", Value::from(self.end_created_at.clone())),
            ("status", Value::from(self.status.clone())),
            ("external_id", Value::from(self.external_id.clone())),
            ("limit", Value::from(self.limit.clone())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::query;

    #[test]
    fn create_params_omit_empty_optionals() {
        let params = CreateEmployeeParams {
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["first_name"], "Jo");
        assert!(body.get("email").is_none());
        assert!(body.get("external_id").is_none());
        assert!(body.get("role_ids").is_none());
    }

    #[test]
    fn update_params_serialize_only_set_fields() {
        let params = UpdateEmployeeParams {
            last_name: Some("Smith".into()),
            role_ids: vec!["r1".into()],
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert!(body.get("first_name").is_none());
        assert_eq!(body["last_name"], "Smith");
        assert_eq!(body["role_ids"][0], "r1");
    }

    #[test]
    fn list_params_encode_in_declaration_order() {
        let params = ListEmployeesParams {
            order: "ASC".into(),
            status: "ACTIVE".into(),
            limit: "10".into(),
            ..Default::default()
        };
        assert_eq!(
            query::query_string(&params).unwrap(),
            "order=ASC&status=ACTIVE&limit=10"
        );
    }

    #[test]
    fn employee_decodes_wire_shape() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "id": "e1",
                "first_name": "Jo",
                "last_name": "Doe",
                "role_ids": ["r1"],
                "authorized_location_ids": [],
                "email": "jo@example.com",
                "status": "ACTIVE",
                "created_at": "2016-01-01T00:00:00Z",
                "updated_at": "2016-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.role_ids, vec!["r1".to_string()]);
        assert!(employee.external_id.is_none());
    }
}
