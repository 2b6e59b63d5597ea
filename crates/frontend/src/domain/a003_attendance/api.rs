use contracts::domain::a003_attendance::{
    Attendance, AttendanceSummary, CreateAttendanceDto, TodayEnvelope, UpdateAttendanceDto,
};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{api_url, del_json, get_json, patch_json, post_empty, post_json};
use crate::shared::query::QueryBuilder;

/// Admin attendance query. `month` (`YYYY-MM`) and the `from`/`to` range are
/// alternatives; the UI clears one side when the other is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceListFilter {
    pub month: String,
    pub from: String,
    pub to: String,
    pub employee_id: Option<i64>,
}

impl AttendanceListFilter {
    fn query(&self, page: Option<(usize, usize)>) -> String {
        let mut builder = QueryBuilder::new();
        if let Some((page, page_size)) = page {
            builder = builder.num("page", page).num("pageSize", page_size);
        }
        builder
            .param("month", &self.month)
            .param("from", &self.from)
            .param("to", &self.to)
            .opt_num("employeeId", self.employee_id)
            .build()
    }
}

/// Fetch one page of attendance records across all employees.
pub async fn list_admin(
    page: usize,
    page_size: usize,
    filter: &AttendanceListFilter,
) -> Result<PageResult<Attendance>, String> {
    let query = filter.query(Some((page, page_size)));
    let envelope: ListEnvelope<Attendance> =
        get_json(&api_url(&format!("/attendance/admin{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

/// Aggregates for the cards above the admin list, same filter as the list.
pub async fn fetch_summary(filter: &AttendanceListFilter) -> Result<AttendanceSummary, String> {
    let query = filter.query(None);
    get_json(&api_url(&format!("/attendance/admin/summary{}", query))).await
}

pub async fn create_record(dto: &CreateAttendanceDto) -> Result<Attendance, String> {
    post_json(&api_url("/attendance/admin"), dto).await
}

pub async fn update_record(id: i64, dto: &UpdateAttendanceDto) -> Result<Attendance, String> {
    patch_json(&api_url(&format!("/attendance/admin/{}", id)), dto).await
}

pub async fn delete_record(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/attendance/admin/{}", id))).await
}

/// Today's record for the signed-in employee; `None` before first check-in.
///
/// Carries a `_t` timestamp so a stale cached reply never hides a check-in
/// that just happened.
pub async fn fetch_today() -> Result<Option<Attendance>, String> {
    let query = QueryBuilder::new()
        .cache_bust(js_sys::Date::now() as u64)
        .build();
    let envelope: TodayEnvelope =
        get_json(&api_url(&format!("/attendance/today{}", query))).await?;
    Ok(envelope.into_record())
}

/// The signed-in employee's own history.
pub async fn list_mine(page: usize, page_size: usize) -> Result<PageResult<Attendance>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .build();
    let envelope: ListEnvelope<Attendance> =
        get_json(&api_url(&format!("/attendance/me{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

pub async fn check_in() -> Result<(), String> {
    post_empty(&api_url("/attendance/check-in")).await
}

pub async fn check_out() -> Result<(), String> {
    post_empty(&api_url("/attendance/check-out")).await
}
