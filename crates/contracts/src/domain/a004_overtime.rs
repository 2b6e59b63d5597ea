use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::EmployeeRef;
use crate::shared::decimal::de_loose_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OvertimeStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Default for OvertimeStatus {
    fn default() -> Self {
        OvertimeStatus::Pending
    }
}

impl OvertimeStatus {
    /// Approve/reject actions are only offered while a request is pending.
    pub fn is_moderatable(&self) -> bool {
        matches!(self, OvertimeStatus::Pending)
    }

    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            OvertimeStatus::Pending => Some("pending"),
            OvertimeStatus::Approved => Some("approved"),
            OvertimeStatus::Rejected => Some("rejected"),
            OvertimeStatus::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overtime {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default, alias = "Employee")]
    pub employee: Option<EmployeeRef>,
    pub ot_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub hours: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: OvertimeStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOvertimeDto {
    /// Set by the admin form; the self-service endpoint infers the caller.
    pub employee_id: Option<i64>,
    pub ot_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub hours: Option<f64>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOvertimeDto {
    pub ot_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub hours: Option<f64>,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_requests_are_moderatable() {
        assert!(OvertimeStatus::Pending.is_moderatable());
        assert!(!OvertimeStatus::Approved.is_moderatable());
        assert!(!OvertimeStatus::Rejected.is_moderatable());
        assert!(!OvertimeStatus::Unknown.is_moderatable());
    }

    #[test]
    fn status_round_trips_lowercase() {
        let row: Overtime = serde_json::from_str(
            r#"{"id": 9, "employee_id": 3, "ot_date": "2025-08-20",
                "hours": "2.5", "status": "approved"}"#,
        )
        .unwrap();
        assert_eq!(row.status, OvertimeStatus::Approved);
        assert_eq!(row.hours, 2.5);
        assert_eq!(
            serde_json::to_string(&OvertimeStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn unknown_status_is_preserved_not_fatal() {
        let row: Overtime = serde_json::from_str(
            r#"{"id": 9, "employee_id": 3, "ot_date": "2025-08-20", "status": "escalated"}"#,
        )
        .unwrap();
        assert_eq!(row.status, OvertimeStatus::Unknown);
        assert!(!row.status.is_moderatable());
    }
}
