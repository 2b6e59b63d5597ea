use contracts::system::roles::{
    CreateRoleDto, Permission, Role, SetPermissionsDto, UpdateRoleDto,
};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{
    api_url, del_json, get_json, patch_json, post_json, put_json_discard,
};
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleListFilter {
    pub q: String,
}

pub async fn list_roles(
    page: usize,
    page_size: usize,
    filter: &RoleListFilter,
) -> Result<PageResult<Role>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("q", &filter.q)
        .build();

    let envelope: ListEnvelope<Role> = get_json(&api_url(&format!("/roles{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

/// One role with its permissions join; the matrix always starts from this
/// instead of possibly stale list rows.
pub async fn fetch_role(id: i64) -> Result<Role, String> {
    get_json(&api_url(&format!("/roles/{}", id))).await
}

pub async fn create_role(dto: &CreateRoleDto) -> Result<Role, String> {
    post_json(&api_url("/roles"), dto).await
}

pub async fn update_role(id: i64, dto: &UpdateRoleDto) -> Result<Role, String> {
    patch_json(&api_url(&format!("/roles/{}", id)), dto).await
}

pub async fn delete_role(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/roles/{}", id))).await
}

/// Replace the role's permission set wholesale.
pub async fn set_permissions(id: i64, dto: &SetPermissionsDto) -> Result<(), String> {
    put_json_discard(&api_url(&format!("/roles/{}/permissions", id)), dto).await
}

/// Whole permission catalog; small enough to fetch in one oversized page.
pub async fn fetch_permissions() -> Result<Vec<Permission>, String> {
    let envelope: ListEnvelope<Permission> =
        get_json(&api_url("/permissions?pageSize=500")).await?;
    Ok(envelope.into_items())
}
