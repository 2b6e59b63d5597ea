use contracts::domain::a001_employee::Employee;
use contracts::domain::a003_attendance::{Attendance, CreateAttendanceDto, UpdateAttendanceDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_attendance::api;
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

/// `(date, "HH:MM")` → ISO datetime; empty time means the field is unset.
fn compose_datetime(date: &str, time: &str) -> Option<String> {
    let time = time.trim();
    if time.is_empty() {
        None
    } else {
        Some(format!("{}T{}:00", date, time))
    }
}

/// Manual attendance correction modal for administrators.
#[component]
pub fn AttendanceForm<F1, F2>(
    existing: Option<Attendance>,
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
    let work_date = RwSignal::new(
        existing.as_ref().map(|r| r.work_date.clone()).unwrap_or_default(),
    );
    let check_in = RwSignal::new(time_for_input(
        existing.as_ref().and_then(|r| r.check_in.as_deref()),
    ));
    let check_out = RwSignal::new(time_for_input(
        existing.as_ref().and_then(|r| r.check_out.as_deref()),
    ));
    let note = RwSignal::new(
        existing.as_ref().and_then(|r| r.note.clone()).unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if is_edit {
        "Cập nhật chấm công"
    } else {
        "Thêm bản ghi chấm công"
    };

    let on_save = move |_| {
        let selected_employee = employee_id.get().trim().parse::<i64>().ok();
        if !is_edit && selected_employee.is_none() {
            set_error.set(Some("Vui lòng chọn nhân viên".to_string()));
            return;
        }
        let date = work_date.get();
        if date.trim().is_empty() {
            set_error.set(Some("Vui lòng chọn ngày làm việc".to_string()));
            return;
        }
        let time_in = check_in.get();
        let time_out = check_out.get();
        if !time_in.trim().is_empty()
            && !time_out.trim().is_empty()
            && time_out.trim() <= time_in.trim()
        {
            set_error.set(Some("Giờ ra phải sau giờ vào".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = record_id {
                let dto = UpdateAttendanceDto {
                    work_date: Some(date.clone()),
                    check_in: compose_datetime(&date, &time_in),
                    check_out: compose_datetime(&date, &time_out),
                    note: non_empty(note.get_untracked()),
                };
                api::update_record(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateAttendanceDto {
                    employee_id: selected_employee.unwrap_or_default(),
                    work_date: date.clone(),
                    check_in: compose_datetime(&date, &time_in),
                    check_out: compose_datetime(&date, &time_out),
                    note: non_empty(note.get_untracked()),
                };
                api::create_record(&dto).await.map(|_| ())
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
                        <Label>"Ngày làm việc *"</Label>
                        <DateInput
                            value=Signal::derive(move || work_date.get())
                            on_change=move |value| work_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ vào"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || check_in.get()
                            on:input=move |ev| check_in.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ ra"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || check_out.get()
                            on:input=move |ev| check_out.set(event_target_value(&ev))
                        />
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
    use super::compose_datetime;

    #[test]
    fn datetime_composition() {
        assert_eq!(
            compose_datetime("2025-08-26", "08:30"),
            Some("2025-08-26T08:30:00".to_string())
        );
        assert_eq!(compose_datetime("2025-08-26", ""), None);
        assert_eq!(compose_datetime("2025-08-26", "  "), None);
    }
}
