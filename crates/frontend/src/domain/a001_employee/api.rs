use contracts::domain::a001_employee::{
    CreateEmployeeDto, Employee, UpdateEmployeeDto, UserOption,
};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{api_url, del_json, get_json, post_json, put_json};
use crate::shared::query::QueryBuilder;
use crate::shared::sort::SortState;

/// Server-side query of the employee list; every field maps to a query
/// parameter and empty values are omitted from the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeListFilter {
    pub q: String,
    pub department: String,
    pub status: String,
    pub sort: SortState,
}

/// Fetch one page of employees.
pub async fn list_employees(
    page: usize,
    page_size: usize,
    filter: &EmployeeListFilter,
) -> Result<PageResult<Employee>, String> {
    let dir = if filter.sort.field.is_empty() {
        ""
    } else {
        filter.sort.dir.as_param()
    };
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("q", &filter.q)
        .param("department", &filter.department)
        .param("status", &filter.status)
        .param("sort", &filter.sort.field)
        .param("dir", dir)
        .build();

    let envelope: ListEnvelope<Employee> =
        get_json(&api_url(&format!("/employees{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

/// Accounts not yet linked to an employee, for the link picker in the form.
pub async fn fetch_users_options() -> Result<Vec<UserOption>, String> {
    let envelope: ListEnvelope<UserOption> =
        get_json(&api_url("/employees/users-options")).await?;
    Ok(envelope.into_items())
}

pub async fn create_employee(dto: &CreateEmployeeDto) -> Result<Employee, String> {
    post_json(&api_url("/employees"), dto).await
}

pub async fn update_employee(id: i64, dto: &UpdateEmployeeDto) -> Result<Employee, String> {
    put_json(&api_url(&format!("/employees/{}", id)), dto).await
}

pub async fn delete_employee(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/employees/{}", id))).await
}
