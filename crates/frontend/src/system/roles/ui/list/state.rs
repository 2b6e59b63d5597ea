use leptos::prelude::*;

use contracts::system::roles::Role;

use crate::shared::list_store::ListStore;
use crate::system::roles::api::RoleListFilter;

pub type RoleListState = ListStore<Role, RoleListFilter>;

pub fn create_state() -> RwSignal<RoleListState> {
    RwSignal::new(RoleListState::default())
}
