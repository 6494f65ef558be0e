//! Role domain — employee role models and request parameters.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::query::QueryParams;

/// A named set of permissions grantable to employees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for [`client::Roles::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRoleParams {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

/// Request body for [`client::Roles::update`]. Omitted fields are left
/// unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRoleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

/// Query parameters for [`client::Roles::list`]. Empty fields are
/// omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ListRolesParams {
    /// `ASC` or `DESC`, by `created_at`.
    pub order: String,
    pub limit: String,
}

impl QueryParams for ListRolesParams {
    fn pairs(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("order", Value::from(self.order.clone())),
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
        let params = CreateRoleParams {
            name: "Cashier".into(),
            permissions: vec!["REGISTER_ACCESS_SALES_HISTORY".into()],
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["name"], "Cashier");
        assert_eq!(body["permissions"][0], "REGISTER_ACCESS_SALES_HISTORY");
        assert!(body.get("is_owner").is_none());
    }

    #[test]
    fn list_params_encode_in_declaration_order() {
        let params = ListRolesParams {
            order: "DESC".into(),
            limit: "5".into(),
        };
        assert_eq!(query::query_string(&params).unwrap(), "order=DESC&limit=5");
    }

    #[test]
    fn role_decodes_wire_shape() {
        let role: Role = serde_json::from_str(
            r#"{
                "id": "r1",
                "name": "Manager",
                "permissions": ["REGISTER_ACCESS_SALES_HISTORY"],
                "is_owner": false,
                "created_at": "2016-01-01T00:00:00Z",
                "updated_at": "2016-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(role.name, "Manager");
        assert!(!role.is_owner);
    }
}
