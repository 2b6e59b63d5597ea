use contracts::domain::a001_employee::Employee;
use contracts::domain::a005_payroll::{CreatePayrollDto, Payroll, UpdatePayrollDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_payroll::api;
use crate::shared::icons::icon;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Non-negative amount from a number input; empty means unset.
fn parse_optional_amount(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= 0.0 => Ok(Some(v)),
        _ => Err(()),
    }
}

/// Create/edit modal for monthly payslips.
#[component]
pub fn PayrollForm<F1, F2>(
    existing: Option<Payroll>,
    employees: RwSignal<Vec<Employee>>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let record_id = existing.as_ref().map(|r| r.id);
    let employee_display = existing
        .as_ref()
        .map(|r| {
            r.employee
                .as_ref()
                .map(|e| e.display_name().to_string())
                .unwrap_or_else(|| format!("#{}", r.employee_id))
        })
        .unwrap_or_default();

    let employee_id = RwSignal::new(String::new());
    let month = RwSignal::new(
        existing.as_ref().map(|r| r.month.clone()).unwrap_or_default(),
    );
    let base_salary = RwSignal::new(
        existing
            .as_ref()
            .map(|r| r.base_salary.to_string())
            .unwrap_or_default(),
    );
    let allowance = RwSignal::new(
        existing
            .as_ref()
            .filter(|r| r.allowance > 0.0)
            .map(|r| r.allowance.to_string())
            .unwrap_or_default(),
    );
    let bonus = RwSignal::new(
        existing
            .as_ref()
            .filter(|r| r.bonus > 0.0)
            .map(|r| r.bonus.to_string())
            .unwrap_or_default(),
    );
    let deduction = RwSignal::new(
        existing
            .as_ref()
            .filter(|r| r.deduction > 0.0)
            .map(|r| r.deduction.to_string())
            .unwrap_or_default(),
    );
    let note = RwSignal::new(
        existing.as_ref().and_then(|r| r.note.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if is_edit {
        "Cập nhật bảng lương"
    } else {
        "Thêm bảng lương"
    };

    let on_save = move |_| {
        let selected_employee = employee_id.get().trim().parse::<i64>().ok();
        if !is_edit && selected_employee.is_none() {
            set_error.set(Some("Vui lòng chọn nhân viên".to_string()));
            return;
        }
        let month_value = month.get();
        if month_value.trim().is_empty() {
            set_error.set(Some("Vui lòng chọn kỳ lương".to_string()));
            return;
        }
        let parsed_base = match base_salary.get().trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => v,
            _ => {
                set_error.set(Some("Lương cơ bản không hợp lệ".to_string()));
                return;
            }
        };
        let parsed_allowance = match parse_optional_amount(&allowance.get()) {
            Ok(v) => v,
            Err(()) => {
                set_error.set(Some("Phụ cấp không hợp lệ".to_string()));
                return;
            }
        };
        let parsed_bonus = match parse_optional_amount(&bonus.get()) {
            Ok(v) => v,
            Err(()) => {
                set_error.set(Some("Thưởng không hợp lệ".to_string()));
                return;
            }
        };
        let parsed_deduction = match parse_optional_amount(&deduction.get()) {
            Ok(v) => v,
            Err(()) => {
                set_error.set(Some("Khấu trừ không hợp lệ".to_string()));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = record_id {
                let dto = UpdatePayrollDto {
                    month: Some(month_value.trim().to_string()),
                    base_salary: Some(parsed_base),
                    allowance: parsed_allowance,
                    bonus: parsed_bonus,
                    deduction: parsed_deduction,
                    note: non_empty(note.get_untracked()),
                };
                api::update(id, &dto).await.map(|_| ())
            } else {
                let dto = CreatePayrollDto {
                    employee_id: selected_employee.unwrap_or_default(),
                    month: month_value.trim().to_string(),
                    base_salary: parsed_base,
                    allowance: parsed_allowance,
                    bonus: parsed_bonus,
                    deduction: parsed_deduction,
                    note: non_empty(note.get_untracked()),
                };
                api::create(&dto).await.map(|_| ())
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
                        <Label>"Kỳ lương *"</Label>
                        <input
                            type="month"
                            class="form__input"
                            prop:value=move || month.get()
                            on:input=move |ev| month.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Lương cơ bản *"</Label>
                        <Input value=base_salary input_type=InputType::Number />
                    </div>

                    <div class="form__group">
                        <Label>"Phụ cấp"</Label>
                        <Input value=allowance input_type=InputType::Number />
                    </div>

                    <div class="form__group">
                        <Label>"Thưởng"</Label>
                        <Input value=bonus input_type=InputType::Number />
                    </div>

                    <div class="form__group">
                        <Label>"Khấu trừ"</Label>
                        <Input value=deduction input_type=InputType::Number />
                    </div>

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

#[cfg(test)]
mod tests {
    use super::parse_optional_amount;

    #[test]
    fn optional_amounts_accept_empty_and_reject_negatives() {
        assert_eq!(parse_optional_amount(""), Ok(None));
        assert_eq!(parse_optional_amount("  "), Ok(None));
        assert_eq!(parse_optional_amount("500000"), Ok(Some(500000.0)));
        assert_eq!(parse_optional_amount("-1"), Err(()));
        assert_eq!(parse_optional_amount("abc"), Err(()));
    }
}
