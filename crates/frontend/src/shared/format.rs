//! Display formatting for the vi-VN locale.
//!
//! The API returns ISO dates (`2025-07-14`, `2025-07-14T08:30:00.000Z`) and
//! plain numbers; everything user-facing goes through here so tables and
//! detail panels agree on one rendering. Absent or unparseable values render
//! as the placeholder dash, never as `Invalid Date` or `NaN`.

use contracts::domain::a001_employee::EmployeeStatus;
use contracts::domain::a002_contract::ContractStatus;
use contracts::domain::a004_overtime::OvertimeStatus;
use contracts::system::users::UserStatus;

pub const EMPTY_PLACEHOLDER: &str = "—";

/// Whole VND with dot thousand-separators: `1234567.0` → `"1.234.567 ₫"`.
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() {
        amount.round() as i64
    } else {
        0
    };
    format!("{} ₫", group_thousands(rounded))
}

/// Absent amounts render as zero dong, not as the placeholder dash; money
/// columns always show a number.
pub fn format_currency_opt(amount: Option<f64>) -> String {
    format_currency(amount.unwrap_or(0.0))
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `2025-07-14` or any ISO datetime → `14/07/2025`.
pub fn format_date(value: &str) -> String {
    match date_part(value) {
        Some(d) => d,
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

pub fn format_date_opt(value: Option<&str>) -> String {
    value.map(format_date).unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// ISO datetime → `14/07/2025 08:30`; falls back to the date alone.
pub fn format_datetime(value: &str) -> String {
    match (date_part(value), time_part(value)) {
        (Some(d), Some(t)) => format!("{} {}", d, t),
        (Some(d), None) => d,
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

/// `08:30:00` or a full ISO datetime → `08:30`.
pub fn format_time(value: &str) -> String {
    match time_part(value) {
        Some(t) => t,
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

pub fn format_time_opt(value: Option<&str>) -> String {
    value.map(format_time).unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// Payroll period `2025-07` → `07/2025`.
pub fn format_month(value: &str) -> String {
    let mut parts = value.trim().splitn(2, '-');
    match (parts.next(), parts.next()) {
        (Some(y), Some(m))
            if y.len() == 4
                && y.bytes().all(|b| b.is_ascii_digit())
                && !m.is_empty()
                && m.len() <= 2
                && m.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{:0>2}/{}", m, y)
        }
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}

/// Worked hours with a decimal comma: `7.5` → `7,5`, `8.0` → `8`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.2}", hours);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.replace('.', ",")
}

/// `HH:MM` for `<input type="time">`, empty when there is nothing to edit.
pub fn time_for_input(value: Option<&str>) -> String {
    value.and_then(time_part).unwrap_or_default()
}

fn date_part(value: &str) -> Option<String> {
    let raw = value.trim();
    let date = raw.split(['T', ' ']).next()?;
    let mut parts = date.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let numeric = |s: &str, max: usize| {
        !s.is_empty() && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
    };
    if y.len() != 4 || !numeric(y, 4) || !numeric(m, 2) || !numeric(d, 2) {
        return None;
    }
    Some(format!("{:0>2}/{:0>2}/{}", d, m, y))
}

fn time_part(value: &str) -> Option<String> {
    let raw = value.trim();
    // Either the segment after the date separator or a bare time string.
    let time = match raw.split_once(['T', ' ']) {
        Some((_, t)) => t,
        None if raw.contains(':') => raw,
        None => return None,
    };
    let mut parts = time.split(':');
    let (h, m) = (parts.next()?, parts.next()?);
    let numeric =
        |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(h) || !numeric(m) {
        return None;
    }
    Some(format!("{:0>2}:{:0>2}", h, m))
}

/// Badge label and CSS class for an overtime request state.
pub fn overtime_badge(status: &OvertimeStatus) -> (&'static str, &'static str) {
    match status {
        OvertimeStatus::Pending => ("Chờ duyệt", "badge badge--warning"),
        OvertimeStatus::Approved => ("Đã duyệt", "badge badge--success"),
        OvertimeStatus::Rejected => ("Từ chối", "badge badge--error"),
        OvertimeStatus::Unknown => ("Không rõ", "badge badge--neutral"),
    }
}

pub fn employee_badge(status: &EmployeeStatus) -> (&'static str, &'static str) {
    match status {
        EmployeeStatus::Active => ("Đang làm việc", "badge badge--success"),
        EmployeeStatus::Inactive => ("Đã nghỉ việc", "badge badge--neutral"),
        EmployeeStatus::Unknown => ("Không rõ", "badge badge--neutral"),
    }
}

pub fn contract_badge(status: &ContractStatus) -> (&'static str, &'static str) {
    match status {
        ContractStatus::Valid => ("Hiệu lực", "badge badge--success"),
        ContractStatus::Expired => ("Hết hạn", "badge badge--warning"),
        ContractStatus::Terminated => ("Đã chấm dứt", "badge badge--error"),
        ContractStatus::Unknown => ("Không rõ", "badge badge--neutral"),
    }
}

pub fn user_badge(status: &UserStatus) -> (&'static str, &'static str) {
    match status {
        UserStatus::Active => ("Hoạt động", "badge badge--success"),
        UserStatus::Inactive => ("Đã khóa", "badge badge--error"),
        UserStatus::Unknown => ("Không rõ", "badge badge--neutral"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(1_234_567.0), "1.234.567 ₫");
        assert_eq!(format_currency(0.0), "0 ₫");
        assert_eq!(format_currency(999.0), "999 ₫");
        assert_eq!(format_currency(1_000.0), "1.000 ₫");
        assert_eq!(format_currency(-1_234.0), "-1.234 ₫");
        assert_eq!(format_currency(12_500_000.49), "12.500.000 ₫");
        assert_eq!(format_currency(f64::NAN), "0 ₫");
        assert_eq!(format_currency_opt(None), "0 ₫");
        assert_eq!(format_currency_opt(Some(1_000.0)), "1.000 ₫");
    }

    #[test]
    fn dates_render_dd_mm_yyyy() {
        assert_eq!(format_date("2025-07-14"), "14/07/2025");
        assert_eq!(format_date("2025-07-14T08:30:00.000Z"), "14/07/2025");
        assert_eq!(format_date("2025-7-4"), "04/07/2025");
        assert_eq!(format_date(""), EMPTY_PLACEHOLDER);
        assert_eq!(format_date("hôm nay"), EMPTY_PLACEHOLDER);
        assert_eq!(format_date_opt(None), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn datetimes_and_times() {
        assert_eq!(format_datetime("2025-07-14T08:30:00.000Z"), "14/07/2025 08:30");
        assert_eq!(format_datetime("2025-07-14"), "14/07/2025");
        assert_eq!(format_time("08:30:00"), "08:30");
        assert_eq!(format_time("2025-07-14T17:05:12Z"), "17:05");
        assert_eq!(format_time("n/a"), EMPTY_PLACEHOLDER);
        assert_eq!(format_time_opt(None), EMPTY_PLACEHOLDER);
        assert_eq!(time_for_input(Some("2025-07-14T08:30:00Z")), "08:30");
        assert_eq!(time_for_input(None), "");
    }

    #[test]
    fn months_and_hours() {
        assert_eq!(format_month("2025-07"), "07/2025");
        assert_eq!(format_month("2025-7"), "07/2025");
        assert_eq!(format_month("july"), EMPTY_PLACEHOLDER);
        assert_eq!(format_hours(7.5), "7,5");
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(7.25), "7,25");
        assert_eq!(format_hours(f64::INFINITY), "0");
    }

    #[test]
    fn badges_cover_unknown() {
        assert_eq!(overtime_badge(&OvertimeStatus::Pending).0, "Chờ duyệt");
        assert_eq!(
            overtime_badge(&OvertimeStatus::Unknown).1,
            "badge badge--neutral"
        );
        assert_eq!(employee_badge(&EmployeeStatus::Active).0, "Đang làm việc");
        assert_eq!(contract_badge(&ContractStatus::Expired).0, "Hết hạn");
        assert_eq!(user_badge(&UserStatus::Inactive).1, "badge badge--error");
    }
}
