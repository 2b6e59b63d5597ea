use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::EmployeeRef;
use crate::shared::decimal::de_loose_f64;

/// Monthly payslip row. All money fields tolerate DECIMAL-as-string;
/// `net_salary` is computed by the backend and never recomputed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default, alias = "Employee")]
    pub employee: Option<EmployeeRef>,
    /// "YYYY-MM"
    pub month: String,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub base_salary: f64,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub allowance: f64,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub overtime_pay: f64,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub bonus: f64,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub deduction: f64,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub net_salary: f64,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePayrollDto {
    pub employee_id: i64,
    pub month: String,
    pub base_salary: f64,
    pub allowance: Option<f64>,
    pub bonus: Option<f64>,
    pub deduction: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePayrollDto {
    pub month: Option<String>,
    pub base_salary: Option<f64>,
    pub allowance: Option<f64>,
    pub bonus: Option<f64>,
    pub deduction: Option<f64>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_decimal_encodings_parse() {
        let row: Payroll = serde_json::from_str(
            r#"{
                "id": 5, "employee_id": 2, "month": "2025-07",
                "base_salary": "9500000.00", "allowance": 500000,
                "overtime_pay": null, "bonus": "", "deduction": "250000",
                "net_salary": "9750000.00"
            }"#,
        )
        .unwrap();
        assert_eq!(row.base_salary, 9500000.0);
        assert_eq!(row.allowance, 500000.0);
        assert_eq!(row.overtime_pay, 0.0);
        assert_eq!(row.bonus, 0.0);
        assert_eq!(row.deduction, 250000.0);
        assert_eq!(row.net_salary, 9750000.0);
    }
}
