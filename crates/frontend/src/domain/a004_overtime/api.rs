use contracts::domain::a004_overtime::{CreateOvertimeDto, Overtime, UpdateOvertimeDto};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{api_url, del_json, get_json, post_json, put_empty, put_json};
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OvertimeListFilter {
    pub status: String,
    pub month: String,
    pub employee_id: Option<i64>,
}

/// Fetch one page of overtime requests across all employees.
pub async fn list_admin(
    page: usize,
    page_size: usize,
    filter: &OvertimeListFilter,
) -> Result<PageResult<Overtime>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("status", &filter.status)
        .param("month", &filter.month)
        .opt_num("employeeId", filter.employee_id)
        .build();

    let envelope: ListEnvelope<Overtime> =
        get_json(&api_url(&format!("/overtimes/admin{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

pub async fn create_admin(dto: &CreateOvertimeDto) -> Result<Overtime, String> {
    post_json(&api_url("/overtimes/admin"), dto).await
}

pub async fn update_admin(id: i64, dto: &UpdateOvertimeDto) -> Result<Overtime, String> {
    put_json(&api_url(&format!("/overtimes/admin/{}", id)), dto).await
}

pub async fn delete_admin(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/overtimes/admin/{}", id))).await
}

/// Moderation transitions; only `pending` requests accept them.
pub async fn approve(id: i64) -> Result<(), String> {
    put_empty(&api_url(&format!("/overtimes/admin/{}/approve", id))).await
}

pub async fn reject(id: i64) -> Result<(), String> {
    put_empty(&api_url(&format!("/overtimes/admin/{}/reject", id))).await
}

/// The signed-in employee's own requests.
pub async fn list_mine(page: usize, page_size: usize) -> Result<PageResult<Overtime>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .build();
    let envelope: ListEnvelope<Overtime> =
        get_json(&api_url(&format!("/overtimes/employees{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

/// Submit a request for the signed-in employee; the server infers who.
pub async fn create_mine(dto: &CreateOvertimeDto) -> Result<Overtime, String> {
    post_json(&api_url("/overtimes/employees"), dto).await
}

/// Employees may withdraw their own requests while still pending.
pub async fn delete_mine(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/overtimes/employees/{}", id))).await
}
