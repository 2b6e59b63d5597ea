use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

impl UserStatus {
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            UserStatus::Active => Some("active"),
            UserStatus::Inactive => Some("inactive"),
            UserStatus::Unknown => None,
        }
    }
}

/// Role joined onto a user row, emitted as `role` or `Role`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default, alias = "Role")]
    pub role: Option<RoleRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl User {
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.name.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// None lets the backend issue a generated initial password.
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /users/:id/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleDto {
    pub role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_join_parses_under_either_casing() {
        let lower: User = serde_json::from_str(
            r#"{"id": 1, "username": "lan.pham", "role": {"id": 2, "name": "hr"}}"#,
        )
        .unwrap();
        let upper: User = serde_json::from_str(
            r#"{"id": 1, "username": "lan.pham", "Role": {"id": 2, "name": "hr"}}"#,
        )
        .unwrap();
        assert_eq!(lower.role_name(), Some("hr"));
        assert_eq!(lower.role, upper.role);
    }

    #[test]
    fn assign_role_serializes_camel_case() {
        let body = serde_json::to_string(&AssignRoleDto {
            role_name: "manager".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"roleName":"manager"}"#);
    }
}
