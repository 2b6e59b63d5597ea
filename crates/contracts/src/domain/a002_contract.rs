use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::EmployeeRef;
use crate::shared::decimal::de_loose_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Valid,
    Expired,
    Terminated,
    #[serde(other)]
    Unknown,
}

impl Default for ContractStatus {
    fn default() -> Self {
        ContractStatus::Valid
    }
}

impl ContractStatus {
    /// Wire value for query params and edit payloads.
    pub fn as_param(&self) -> &'static str {
        match self {
            ContractStatus::Valid => "valid",
            ContractStatus::Expired => "expired",
            ContractStatus::Terminated => "terminated",
            ContractStatus::Unknown => "",
        }
    }
}

/// Labor contract row. `base_salary` arrives as a DECIMAL string from the
/// backend, hence the loose deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default, alias = "Employee")]
    pub employee: Option<EmployeeRef>,
    pub contract_type: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub base_salary: f64,
    #[serde(default)]
    pub status: ContractStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContractDto {
    pub employee_id: i64,
    pub contract_type: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub base_salary: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContractDto {
    pub contract_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub base_salary: Option<f64>,
    pub status: Option<String>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_salary_string_parses() {
        let row: Contract = serde_json::from_str(
            r#"{
                "id": 1, "employee_id": 4, "contract_type": "fixed_term",
                "start_date": "2025-01-01", "base_salary": "12500000.00",
                "status": "valid",
                "Employee": {"id": 4, "full_name": "Phạm Quốc Cường"}
            }"#,
        )
        .unwrap();
        assert_eq!(row.base_salary, 12500000.0);
        assert_eq!(row.employee.unwrap().display_name(), "Phạm Quốc Cường");
    }

    #[test]
    fn unexpected_status_maps_to_unknown() {
        let row: Contract = serde_json::from_str(
            r#"{"id": 2, "employee_id": 4, "contract_type": "probation",
                "start_date": "2025-06-01", "status": "suspended"}"#,
        )
        .unwrap();
        assert_eq!(row.status, ContractStatus::Unknown);
    }
}
