use contracts::domain::a002_contract::{Contract, CreateContractDto, UpdateContractDto};
use contracts::shared::pagination::{ListEnvelope, PageResult};

use crate::shared::api_utils::{api_url, del_json, get_json, patch_json, post_binary, post_json};
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractListFilter {
    pub q: String,
    pub status: String,
}

/// Fetch one page of labor contracts.
pub async fn list_contracts(
    page: usize,
    page_size: usize,
    filter: &ContractListFilter,
) -> Result<PageResult<Contract>, String> {
    let query = QueryBuilder::new()
        .num("page", page)
        .num("pageSize", page_size)
        .param("q", &filter.q)
        .param("status", &filter.status)
        .build();

    let envelope: ListEnvelope<Contract> =
        get_json(&api_url(&format!("/contracts{}", query))).await?;
    Ok(envelope.into_page(page, page_size))
}

pub async fn create_contract(dto: &CreateContractDto) -> Result<Contract, String> {
    post_json(&api_url("/contracts"), dto).await
}

pub async fn update_contract(id: i64, dto: &UpdateContractDto) -> Result<Contract, String> {
    patch_json(&api_url(&format!("/contracts/{}", id)), dto).await
}

pub async fn delete_contract(id: i64) -> Result<(), String> {
    del_json(&api_url(&format!("/contracts/{}", id))).await
}

/// Server renders the contract as a Word document and returns the raw bytes.
pub async fn export_contract(id: i64) -> Result<Vec<u8>, String> {
    post_binary(&api_url(&format!("/contracts/{}/export", id))).await
}
