use leptos::prelude::*;

use contracts::domain::a003_attendance::Attendance;

use crate::domain::a003_attendance::api::AttendanceListFilter;
use crate::shared::list_store::ListStore;

pub type AttendanceListState = ListStore<Attendance, AttendanceListFilter>;

pub fn create_state() -> RwSignal<AttendanceListState> {
    RwSignal::new(AttendanceListState::default())
}
