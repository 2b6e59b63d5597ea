use leptos::prelude::*;

use contracts::domain::a002_contract::Contract;

use crate::domain::a002_contract::api::ContractListFilter;
use crate::shared::list_store::ListStore;

pub type ContractListState = ListStore<Contract, ContractListFilter>;

pub fn create_state() -> RwSignal<ContractListState> {
    RwSignal::new(ContractListState::default())
}
