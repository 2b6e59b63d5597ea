use contracts::domain::a005_payroll::{CreatePayrollDto, Payroll, UpdatePayrollDto};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{api_url, del_json, get_json, patch_json, post_json};
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayrollListFilter {
    pub month: String,
    pub employee_id: Option<i64>,
}

/// Fetch one page of payslips across all employees.
pub async fn list_admin(
    page: usize,
    page_size: usize,
    filter: &PayrollListFilter,
) -> Result<PageResult<Payroll>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("month", &filter.month)
        .opt_num("employeeId", filter.employee_id)
        .build();

    let envelope: ListEnvelope<Payroll> =
        get_json(&api_url(&format!("/payroll/admin{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

pub async fn create(dto: &CreatePayrollDto) -> Result<Payroll, String> {
    post_json(&api_url("/payroll/admin"), dto).await
}

pub async fn update(id: i64, dto: &UpdatePayrollDto) -> Result<Payroll, String> {
    patch_json(&api_url(&format!("/payroll/admin/{}", id)), dto).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/payroll/admin/{}", id))).await
}

/// The signed-in employee's payslips. The endpoint is not paged.
pub async fn list_mine() -> Result<Vec<Payroll>, String> {
    let envelope: ListEnvelope<Payroll> = get_json(&api_url("/payroll/me")).await?;
    Ok(envelope.into_items())
}
