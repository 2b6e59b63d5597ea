use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_contract::{Contract, CreateContractDto, UpdateContractDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api as employee_api;
use crate::domain::a002_contract::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Create/edit modal. The employee binding is fixed after creation; editing
/// only touches terms, salary and status.
#[component]
pub fn ContractForm<F1, F2>(
    existing: Option<Contract>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let contract_id = existing.as_ref().map(|c| c.id);
    let employee_display = existing
        .as_ref()
        .map(|c| {
            c.employee
                .as_ref()
                .map(|e| e.display_name().to_string())
                .unwrap_or_else(|| format!("#{}", c.employee_id))
        })
        .unwrap_or_default();

    let employee_id = RwSignal::new(
        existing
            .as_ref()
            .map(|c| c.employee_id.to_string())
            .unwrap_or_default(),
    );
    let contract_type = RwSignal::new(
        existing
            .as_ref()
            .map(|c| c.contract_type.clone())
            .unwrap_or_else(|| "probation".to_string()),
    );
    let start_date = RwSignal::new(
        existing.as_ref().map(|c| c.start_date.clone()).unwrap_or_default(),
    );
    let end_date = RwSignal::new(
        existing.as_ref().and_then(|c| c.end_date.clone()).unwrap_or_default(),
    );
    let salary_input = RwSignal::new(
        existing
            .as_ref()
            .map(|c| format!("{}", c.base_salary as i64))
            .unwrap_or_default(),
    );
    let status = RwSignal::new(
        existing
            .as_ref()
            .map(|c| c.status.as_param())
            .filter(|s| !s.is_empty())
            .unwrap_or("valid")
            .to_string(),
    );
    let note = RwSignal::new(
        existing.as_ref().and_then(|c| c.note.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());

    // Employee picker source; only needed when creating.
    Effect::new(move |_| {
        if is_edit {
            return;
        }
        spawn_local(async move {
            match employee_api::list_employees(1, 200, &Default::default()).await {
                Ok(result) => employees.set(result.data),
                Err(e) => log::warn!("employee options unavailable: {}", e),
            }
        });
    });

    let title = if is_edit {
        "Cập nhật hợp đồng"
    } else {
        "Thêm hợp đồng"
    };

    let on_save = move |_| {
        let selected_employee = employee_id.get().trim().parse::<i64>().ok();
        if !is_edit && selected_employee.is_none() {
            set_error.set(Some("Vui lòng chọn nhân viên".to_string()));
            return;
        }
        if start_date.get().trim().is_empty() {
            set_error.set(Some("Vui lòng chọn ngày bắt đầu".to_string()));
            return;
        }
        let salary = match salary_input.get().trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => v,
            _ => {
                set_error.set(Some("Lương cơ bản không hợp lệ".to_string()));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = contract_id {
                let dto = UpdateContractDto {
                    contract_type: Some(contract_type.get_untracked()),
                    start_date: Some(start_date.get_untracked()),
                    end_date: non_empty(end_date.get_untracked()),
                    base_salary: Some(salary),
                    status: Some(status.get_untracked()),
                    note: non_empty(note.get_untracked()),
                };
                api::update_contract(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateContractDto {
                    employee_id: selected_employee.unwrap_or_default(),
                    contract_type: contract_type.get_untracked(),
                    start_date: start_date.get_untracked(),
                    end_date: non_empty(end_date.get_untracked()),
                    base_salary: salary,
                    note: non_empty(note.get_untracked()),
                };
                api::create_contract(&dto).await.map(|_| ())
            };

            match outcome {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nhân viên *"</Label>
                        {if is_edit {
                            view! {
                                <select class="form__select" disabled=true>
                                    <option>{employee_display.clone()}</option>
                                </select>
                            }
                            .into_any()
                        } else {
                            view! {
                                <select
                                    class="form__select"
                                    on:change=move |ev| employee_id.set(event_target_value(&ev))
                                    prop:value=move || employee_id.get()
                                >
                                    <option value="">"— Chọn nhân viên —"</option>
                                    <For each=move || employees.get() key=|e| e.id let:employee>
                                        <option value=employee.id.to_string()>
                                            {employee.full_name.clone()}
                                        </option>
                                    </For>
                                </select>
                            }
                            .into_any()
                        }}
                    </div>

                    <div class="form__group">
                        <Label>"Loại hợp đồng"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| contract_type.set(event_target_value(&ev))
                            prop:value=move || contract_type.get()
                        >
                            <option value="probation">"Thử việc"</option>
                            <option value="fixed_term">"Có thời hạn"</option>
                            <option value="indefinite">"Không thời hạn"</option>
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Ngày bắt đầu *"</Label>
                        <DateInput
                            value=Signal::derive(move || start_date.get())
                            on_change=move |value| start_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Ngày kết thúc"</Label>
                        <DateInput
                            value=Signal::derive(move || end_date.get())
                            on_change=move |value| end_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Lương cơ bản (VND) *"</Label>
                        <Input
                            value=salary_input
                            input_type=InputType::Number
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    {is_edit
                        .then(|| {
                            view! {
                                <div class="form__group">
                                    <Label>"Trạng thái"</Label>
                                    <select
                                        class="form__select"
                                        on:change=move |ev| status.set(event_target_value(&ev))
                                        prop:value=move || status.get()
                                    >
                                        <option value="valid">"Hiệu lực"</option>
                                        <option value="expired">"Hết hạn"</option>
                                        <option value="terminated">"Đã chấm dứt"</option>
                                    </select>
                                </div>
                            }
                        })}

                    <div class="form__group">
                        <Label>"Ghi chú"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Hủy"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
