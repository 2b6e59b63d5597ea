use leptos::prelude::*;

use contracts::domain::a004_overtime::Overtime;

use crate::domain::a004_overtime::api::OvertimeListFilter;
use crate::shared::list_store::ListStore;

pub type OvertimeListState = ListStore<Overtime, OvertimeListFilter>;

pub fn create_state() -> RwSignal<OvertimeListState> {
    RwSignal::new(OvertimeListState::default())
}
