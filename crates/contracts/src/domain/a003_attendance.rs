use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::EmployeeRef;
use crate::shared::decimal::de_loose_f64;

/// One attendance record. `check_in`/`check_out` are ISO datetimes; a missing
/// `check_out` means the working day is still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default, alias = "Employee")]
    pub employee: Option<EmployeeRef>,
    pub work_date: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub total_hours: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl Attendance {
    pub fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }
}

/// `GET /attendance/admin/summary` — aggregate cards above the admin list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[serde(default)]
    pub days_present: usize,
    #[serde(default)]
    pub days_completed: usize,
    #[serde(default, deserialize_with = "de_loose_f64")]
    pub total_hours: f64,
}

/// `GET /attendance/today` — today's record for the signed-in employee.
/// Comes back either bare or wrapped in `{data: ...}`, null when the day
/// has not started.
///
/// `Bare` is tried first: `Wrapped`'s `data` field is an `Option` and would
/// otherwise swallow a bare record as `data: None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TodayEnvelope {
    Bare(Option<Attendance>),
    Wrapped { data: Option<Attendance> },
}

impl TodayEnvelope {
    pub fn into_record(self) -> Option<Attendance> {
        match self {
            TodayEnvelope::Bare(record) => record,
            TodayEnvelope::Wrapped { data } => data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAttendanceDto {
    pub employee_id: i64,
    pub work_date: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAttendanceDto {
    pub work_date: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_camel_case() {
        let s: AttendanceSummary = serde_json::from_str(
            r#"{"daysPresent": 20, "daysCompleted": 18, "totalHours": "156.5"}"#,
        )
        .unwrap();
        assert_eq!(s.days_present, 20);
        assert_eq!(s.days_completed, 18);
        assert_eq!(s.total_hours, 156.5);
    }

    #[test]
    fn today_envelope_accepts_wrapped_bare_and_null() {
        let wrapped: TodayEnvelope = serde_json::from_str(
            r#"{"data": {"id": 1, "employee_id": 2, "work_date": "2025-08-26",
                "check_in": "2025-08-26T08:01:00Z"}}"#,
        )
        .unwrap();
        assert!(wrapped.into_record().unwrap().is_open());

        let bare: TodayEnvelope = serde_json::from_str(
            r#"{"id": 1, "employee_id": 2, "work_date": "2025-08-26"}"#,
        )
        .unwrap();
        assert!(bare.into_record().is_some());

        let none: TodayEnvelope = serde_json::from_str("null").unwrap();
        assert!(none.into_record().is_none());

        let wrapped_null: TodayEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(wrapped_null.into_record().is_none());
    }
}
