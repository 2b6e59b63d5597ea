//! Maps tab keys to page components; the only place that list exists.

use leptos::prelude::*;

use crate::domain::a001_employee::ui::EmployeeList;
use crate::domain::a002_contract::ui::ContractList;
use crate::domain::a003_attendance::ui::{AttendanceAdminList, AttendanceSelfService};
use crate::domain::a004_overtime::ui::{OvertimeAdminList, OvertimeSelfService};
use crate::domain::a005_payroll::ui::{PayrollAdminList, PayrollSelfService};
use crate::system::roles::ui::RoleList;
use crate::system::users::ui::UserList;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_employee" => view! { <EmployeeList /> }.into_any(),
        "a002_contract" => view! { <ContractList /> }.into_any(),
        "a003_attendance" => view! { <AttendanceAdminList /> }.into_any(),
        "a003_attendance_self" => view! { <AttendanceSelfService /> }.into_any(),
        "a004_overtime" => view! { <OvertimeAdminList /> }.into_any(),
        "a004_overtime_self" => view! { <OvertimeSelfService /> }.into_any(),
        "a005_payroll" => view! { <PayrollAdminList /> }.into_any(),
        "a005_payroll_self" => view! { <PayrollSelfService /> }.into_any(),
        "users" => view! { <UserList /> }.into_any(),
        "roles" => view! { <RoleList /> }.into_any(),
        _ => view! {
            <div class="tab-placeholder">{format!("Không tìm thấy trang: {}", key)}</div>
        }
        .into_any(),
    }
}
