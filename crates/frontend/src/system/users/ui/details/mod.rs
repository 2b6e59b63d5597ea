use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::validate::{has_min_len, is_valid_email};
use crate::system::users::api;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Create/edit modal for login accounts. The username is fixed after
/// creation; passwords change only through the reset action.
#[component]
pub fn UserForm<F1, F2>(existing: Option<User>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let record_id = existing.as_ref().map(|u| u.id);

    let username = RwSignal::new(
        existing.as_ref().map(|u| u.username.clone()).unwrap_or_default(),
    );
    let email = RwSignal::new(
        existing.as_ref().and_then(|u| u.email.clone()).unwrap_or_default(),
    );
    let full_name = RwSignal::new(
        existing
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(
        existing
            .as_ref()
            .and_then(|u| u.status.as_param())
            .unwrap_or("active")
            .to_string(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if is_edit {
        "Cập nhật người dùng"
    } else {
        "Thêm người dùng"
    };

    let on_save = move |_| {
        if !is_edit && !has_min_len(&username.get(), 3) {
            set_error.set(Some("Tên đăng nhập phải có ít nhất 3 ký tự".to_string()));
            return;
        }
        let email_value = email.get();
        if !email_value.trim().is_empty() && !is_valid_email(&email_value) {
            set_error.set(Some("Email không hợp lệ".to_string()));
            return;
        }
        let password_value = password.get();
        if !is_edit && !password_value.trim().is_empty() && !has_min_len(&password_value, 6) {
            set_error.set(Some("Mật khẩu phải có ít nhất 6 ký tự".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = record_id {
                let dto = UpdateUserDto {
                    email: non_empty(email.get_untracked()),
                    full_name: non_empty(full_name.get_untracked()),
                    status: Some(status.get_untracked()),
                };
                api::update_user(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateUserDto {
                    username: username.get_untracked().trim().to_string(),
                    email: non_empty(email.get_untracked()),
                    full_name: non_empty(full_name.get_untracked()),
                    password: non_empty(password.get_untracked()),
                };
                api::create_user(&dto).await.map(|_| ())
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
                        <Label>"Tên đăng nhập *"</Label>
                        <Input value=username disabled=is_edit />
                    </div>

                    <div class="form__group">
                        <Label>"Họ tên"</Label>
                        <Input value=full_name />
                    </div>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email input_type=InputType::Email />
                    </div>

                    {(!is_edit)
                        .then(|| {
                            view! {
                                <div class="form__group">
                                    <Label>"Mật khẩu"</Label>
                                    <Input
                                        value=password
                                        input_type=InputType::Password
                                        placeholder="Để trống để cấp mật khẩu tự động"
                                    />
                                </div>
                            }
                        })}

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
                                        <option value="active">"Hoạt động"</option>
                                        <option value="inactive">"Đã khóa"</option>
                                    </select>
                                </div>
                            }
                        })}
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

/// Role assignment modal; replaces whatever role the user held.
#[component]
pub fn AssignRoleForm<F1, F2>(
    user: User,
    role_names: RwSignal<Vec<String>>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let user_id = user.id;
    let username = user.username.clone();
    let selected = RwSignal::new(
        user.role_name().map(|r| r.to_string()).unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let role = selected.get();
        if role.trim().is_empty() {
            set_error.set(Some("Vui lòng chọn vai trò".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::assign_role(user_id, role.trim()).await {
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
                    <h2 class="modal-title">{format!("Gán vai trò: {}", username)}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Vai trò *"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| selected.set(event_target_value(&ev))
                            prop:value=move || selected.get()
                        >
                            <option value="">"— Chọn vai trò —"</option>
                            <For each=move || role_names.get() key=|n| n.clone() let:name>
                                <option value=name.clone()>{name.clone()}</option>
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
