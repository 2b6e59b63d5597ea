use leptos::prelude::*;

use contracts::domain::a001_employee::Employee;

use crate::domain::a001_employee::api::EmployeeListFilter;
use crate::shared::list_store::ListStore;

pub type EmployeeListState = ListStore<Employee, EmployeeListFilter>;

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}
