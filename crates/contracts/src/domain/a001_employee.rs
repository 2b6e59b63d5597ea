use serde::{Deserialize, Serialize};

/// Employment status as the backend reports it.
///
/// `Unknown` absorbs any value a newer backend might add; render code maps it
/// to a neutral badge instead of failing the whole page parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Active
    }
}

impl EmployeeStatus {
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            EmployeeStatus::Active => Some("active"),
            EmployeeStatus::Inactive => Some("inactive"),
            EmployeeStatus::Unknown => None,
        }
    }
}

/// Linked login account, joined by the backend for display only.
///
/// Sequelize-style backends emit the join either as `user` or `User`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, alias = "User")]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Joined employee object carried by contracts/attendance/overtime/payroll
/// rows, under either `employee` or `Employee` casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl EmployeeRef {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("—")
    }
}

/// `GET /employees/users-options` entry: accounts available for linking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOption {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserOption {
    pub fn label(&self) -> String {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => format!("{} ({})", name, email),
            (Some(name), None) => name.clone(),
            (None, Some(email)) => email.clone(),
            (None, None) => format!("#{}", self.id),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployeeDto {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub join_date: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub join_date: Option<String>,
    pub status: Option<String>,
    pub user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_user_parses_under_either_casing() {
        let lower: Employee = serde_json::from_str(
            r#"{"id": 1, "full_name": "Nguyễn Văn An", "user": {"id": 7, "username": "an.nguyen"}}"#,
        )
        .unwrap();
        let upper: Employee = serde_json::from_str(
            r#"{"id": 1, "full_name": "Nguyễn Văn An", "User": {"id": 7, "username": "an.nguyen"}}"#,
        )
        .unwrap();
        assert_eq!(lower.user, upper.user);
        assert_eq!(lower.user.unwrap().id, 7);
    }

    #[test]
    fn unknown_status_does_not_fail_the_row() {
        let row: Employee = serde_json::from_str(
            r#"{"id": 2, "full_name": "Trần Thị Bình", "status": "sabbatical"}"#,
        )
        .unwrap();
        assert_eq!(row.status, EmployeeStatus::Unknown);
    }

    #[test]
    fn user_option_label_prefers_name_with_email() {
        let opt = UserOption {
            id: 3,
            name: Some("Lê Minh".into()),
            email: Some("minh@congty.vn".into()),
        };
        assert_eq!(opt.label(), "Lê Minh (minh@congty.vn)");
        let bare = UserOption {
            id: 3,
            name: None,
            email: None,
        };
        assert_eq!(bare.label(), "#3");
    }
}
