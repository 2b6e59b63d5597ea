use contracts::domain::a001_employee::Employee;
use contracts::domain::a004_overtime::{CreateOvertimeDto, Overtime, UpdateOvertimeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_overtime::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::format::time_for_input;
use crate::shared::icons::icon;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// `"HH:MM"` from a time input → `"HH:MM:00"`; empty means unset.
fn time_payload(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == 5 {
        Some(format!("{}:00", trimmed))
    } else {
        Some(trimmed.to_string())
    }
}

/// Create/edit modal for overtime requests entered by administrators.
#[component]
pub fn OvertimeForm<F1, F2>(
    existing: Option<Overtime>,
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
    let ot_date = RwSignal::new(
        existing.as_ref().map(|r| r.ot_date.clone()).unwrap_or_default(),
    );
    let start_time = RwSignal::new(time_for_input(
        existing.as_ref().and_then(|r| r.start_time.as_deref()),
    ));
    let end_time = RwSignal::new(time_for_input(
        existing.as_ref().and_then(|r| r.end_time.as_deref()),
    ));
    let hours = RwSignal::new(
        existing
            .as_ref()
            .filter(|r| r.hours > 0.0)
            .map(|r| r.hours.to_string())
            .unwrap_or_default(),
    );
    let reason = RwSignal::new(
        existing.as_ref().and_then(|r| r.reason.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if is_edit {
        "Cập nhật yêu cầu làm thêm"
    } else {
        "Thêm yêu cầu làm thêm"
    };

    let on_save = move |_| {
        let selected_employee = employee_id.get().trim().parse::<i64>().ok();
        if !is_edit && selected_employee.is_none() {
            set_error.set(Some("Vui lòng chọn nhân viên".to_string()));
            return;
        }
        let date = ot_date.get();
        if date.trim().is_empty() {
            set_error.set(Some("Vui lòng chọn ngày làm thêm".to_string()));
            return;
        }
        let time_start = start_time.get();
        let time_end = end_time.get();
        if !time_start.trim().is_empty()
            && !time_end.trim().is_empty()
            && time_end.trim() <= time_start.trim()
        {
            set_error.set(Some("Giờ kết thúc phải sau giờ bắt đầu".to_string()));
            return;
        }
        let hours_value = hours.get();
        let parsed_hours = match hours_value.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(h) if h >= 0.0 => Some(h),
                _ => {
                    set_error.set(Some("Số giờ không hợp lệ".to_string()));
                    return;
                }
            },
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = record_id {
                let dto = UpdateOvertimeDto {
                    ot_date: Some(date.clone()),
                    start_time: time_payload(&time_start),
                    end_time: time_payload(&time_end),
                    hours: parsed_hours,
                    reason: non_empty(reason.get_untracked()),
                };
                api::update_admin(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateOvertimeDto {
                    employee_id: selected_employee,
                    ot_date: date.clone(),
                    start_time: time_payload(&time_start),
                    end_time: time_payload(&time_end),
                    hours: parsed_hours,
                    reason: non_empty(reason.get_untracked()),
                };
                api::create_admin(&dto).await.map(|_| ())
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
                        <Label>"Ngày làm thêm *"</Label>
                        <DateInput
                            value=Signal::derive(move || ot_date.get())
                            on_change=move |value| ot_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ bắt đầu"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || start_time.get()
                            on:input=move |ev| start_time.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ kết thúc"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || end_time.get()
                            on:input=move |ev| end_time.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Số giờ"</Label>
                        <Input
                            value=hours
                            input_type=InputType::Number
                            placeholder="Tự tính nếu bỏ trống"
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Lý do"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
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
    use super::time_payload;

    #[test]
    fn time_payload_normalizes_input_values() {
        assert_eq!(time_payload("18:30"), Some("18:30:00".to_string()));
        assert_eq!(time_payload("18:30:15"), Some("18:30:15".to_string()));
        assert_eq!(time_payload(""), None);
        assert_eq!(time_payload("   "), None);
    }
}
