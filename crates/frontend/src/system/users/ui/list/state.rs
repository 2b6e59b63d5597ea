use leptos::prelude::*;

use contracts::system::users::User;

use crate::shared::list_store::ListStore;
use crate::system::users::api::UserListFilter;

pub type UserListState = ListStore<User, UserListFilter>;

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}
