use contracts::system::roles::RoleNameEntry;
use contracts::system::users::{AssignRoleDto, CreateUserDto, UpdateUserDto, User};
use contracts::shared::pagination::{ListEnvelope, PageResult};
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::{
    api_url, get_json, patch_json, post_empty, post_json, post_json_discard,
};
use crate::shared::query::QueryBuilder;

/// Serializable so the users page can mirror its filters into the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserListFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
}

pub async fn list_users(
    page: usize,
    page_size: usize,
    filter: &UserListFilter,
) -> Result<PageResult<User>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("q", &filter.q)
        .param("status", &filter.status)
        .param("role", &filter.role)
        .build();

    let envelope: ListEnvelope<User> = get_json(&api_url(&format!("/users{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, String> {
    post_json(&api_url("/users"), dto).await
}

pub async fn update_user(id: i64, dto: &UpdateUserDto) -> Result<User, String> {
    patch_json(&api_url(&format!("/users/{}", id)), dto).await
}

/// Replace the user's role by name.
pub async fn assign_role(id: i64, role_name: &str) -> Result<(), String> {
    let dto = AssignRoleDto {
        role_name: role_name.to_string(),
    };
    post_json_discard(&api_url(&format!("/users/{}/role", id)), &dto).await
}

/// The backend issues a new temporary password out of band.
pub async fn reset_password(id: i64) -> Result<(), String> {
    post_empty(&api_url(&format!("/users/{}/reset-password", id))).await
}

/// Minimal role-name catalog for the assignment dropdown.
pub async fn fetch_role_names() -> Result<Vec<String>, String> {
    let entries: Vec<RoleNameEntry> =
        get_json(&api_url("/roles/rolesName?minimal=1")).await?;
    Ok(entries.iter().map(|e| e.name().to_string()).collect())
}
