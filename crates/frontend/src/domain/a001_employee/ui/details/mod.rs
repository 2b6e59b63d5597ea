use contracts::domain::a001_employee::{
    CreateEmployeeDto, Employee, UpdateEmployeeDto, UserOption,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::validate::{has_min_len, is_valid_email};

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Create/edit modal; `existing = None` creates, `Some` edits.
#[component]
pub fn EmployeeForm<F1, F2>(
    existing: Option<Employee>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let employee_id = existing.as_ref().map(|e| e.id);
    let linked_user = existing.as_ref().and_then(|e| e.user.clone());

    let full_name = RwSignal::new(
        existing.as_ref().map(|e| e.full_name.clone()).unwrap_or_default(),
    );
    let email = RwSignal::new(
        existing.as_ref().and_then(|e| e.email.clone()).unwrap_or_default(),
    );
    let phone = RwSignal::new(
        existing.as_ref().and_then(|e| e.phone.clone()).unwrap_or_default(),
    );
    let department = RwSignal::new(
        existing.as_ref().and_then(|e| e.department.clone()).unwrap_or_default(),
    );
    let position = RwSignal::new(
        existing.as_ref().and_then(|e| e.position.clone()).unwrap_or_default(),
    );
    let join_date = RwSignal::new(
        existing.as_ref().and_then(|e| e.join_date.clone()).unwrap_or_default(),
    );
    let status = RwSignal::new(
        existing
            .as_ref()
            .and_then(|e| e.status.as_param())
            .unwrap_or("active")
            .to_string(),
    );
    let user_id = RwSignal::new(
        existing
            .as_ref()
            .and_then(|e| e.user_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let user_options: RwSignal<Vec<UserOption>> = RwSignal::new(Vec::new());

    // The options endpoint lists unlinked accounts only; keep the currently
    // linked one selectable while editing.
    Effect::new(move |_| {
        let linked = linked_user.clone();
        spawn_local(async move {
            match api::fetch_users_options().await {
                Ok(mut options) => {
                    if let Some(user) = linked {
                        if !options.iter().any(|o| o.id == user.id) {
                            options.insert(
                                0,
                                UserOption {
                                    id: user.id,
                                    name: user.username.clone(),
                                    email: user.email.clone(),
                                },
                            );
                        }
                    }
                    user_options.set(options);
                }
                Err(e) => log::warn!("users-options unavailable: {}", e),
            }
        });
    });

    let title = if is_edit {
        "Cập nhật nhân viên"
    } else {
        "Thêm nhân viên"
    };

    let on_save = move |_| {
        let name = full_name.get();
        if !has_min_len(&name, 2) {
            set_error.set(Some("Họ tên phải có ít nhất 2 ký tự".to_string()));
            return;
        }
        let email_value = email.get();
        if !email_value.trim().is_empty() && !is_valid_email(&email_value) {
            set_error.set(Some("Email không hợp lệ".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        let selected_user = user_id.get().trim().parse::<i64>().ok();

        spawn_local(async move {
            let outcome = if let Some(id) = employee_id {
                let dto = UpdateEmployeeDto {
                    full_name: Some(name.trim().to_string()),
                    email: non_empty(email_value),
                    phone: non_empty(phone.get_untracked()),
                    department: non_empty(department.get_untracked()),
                    position: non_empty(position.get_untracked()),
                    join_date: non_empty(join_date.get_untracked()),
                    status: Some(status.get_untracked()),
                    user_id: selected_user,
                };
                api::update_employee(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateEmployeeDto {
                    full_name: name.trim().to_string(),
                    email: non_empty(email_value),
                    phone: non_empty(phone.get_untracked()),
                    department: non_empty(department.get_untracked()),
                    position: non_empty(position.get_untracked()),
                    join_date: non_empty(join_date.get_untracked()),
                    status: Some(status.get_untracked()),
                    user_id: selected_user,
                };
                api::create_employee(&dto).await.map(|_| ())
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
                        <Label>"Họ tên *"</Label>
                        <Input value=full_name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Điện thoại"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Phòng ban"</Label>
                        <Input value=department disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Chức vụ"</Label>
                        <Input value=position disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Ngày vào làm"</Label>
                        <DateInput
                            value=Signal::derive(move || join_date.get())
                            on_change=move |value| join_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Trạng thái"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| status.set(event_target_value(&ev))
                            prop:value=move || status.get()
                        >
                            <option value="active">"Đang làm việc"</option>
                            <option value="inactive">"Đã nghỉ việc"</option>
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Tài khoản liên kết"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| user_id.set(event_target_value(&ev))
                            prop:value=move || user_id.get()
                        >
                            <option value="">"— Không liên kết —"</option>
                            <For each=move || user_options.get() key=|o| o.id let:option>
                                <option value=option.id.to_string()>{option.label()}</option>
                            </For>
                        </select>
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
