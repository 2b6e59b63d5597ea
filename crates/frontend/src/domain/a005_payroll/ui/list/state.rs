use leptos::prelude::*;

use contracts::domain::a005_payroll::Payroll;

use crate::domain::a005_payroll::api::PayrollListFilter;
use crate::shared::list_store::ListStore;

pub type PayrollListState = ListStore<Payroll, PayrollListFilter>;

pub fn create_state() -> RwSignal<PayrollListState> {
    RwSignal::new(PayrollListState::default())
}
