use std::collections::BTreeMap;

use contracts::system::roles::{
    CreateRoleDto, Permission, PermissionSelection, Role, UpdateRoleDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::validate::has_min_len;
use crate::system::roles::api;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

const UNGROUPED: &str = "Khác";

/// Catalog entries bucketed by their `group` key, in stable name order, so
/// the matrix renders the same way on every open.
fn group_permissions(catalog: &[Permission]) -> Vec<(String, Vec<Permission>)> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for permission in catalog {
        let key = permission
            .group
            .clone()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| UNGROUPED.to_string());
        groups.entry(key).or_default().push(permission.clone());
    }
    for list in groups.values_mut() {
        list.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups.into_iter().collect()
}

/// Create/edit modal for the role record itself; permissions are managed
/// separately in [`PermissionMatrix`].
#[component]
pub fn RoleForm<F1, F2>(existing: Option<Role>, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let is_edit = existing.is_some();
    let record_id = existing.as_ref().map(|r| r.id);

    let name = RwSignal::new(existing.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        existing
            .as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = if is_edit { "Cập nhật vai trò" } else { "Thêm vai trò" };

    let on_save = move |_| {
        if !has_min_len(&name.get(), 2) {
            set_error.set(Some("Tên vai trò phải có ít nhất 2 ký tự".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = if let Some(id) = record_id {
                let dto = UpdateRoleDto {
                    name: Some(name.get_untracked().trim().to_string()),
                    description: non_empty(description.get_untracked()),
                };
                api::update_role(id, &dto).await.map(|_| ())
            } else {
                let dto = CreateRoleDto {
                    name: name.get_untracked().trim().to_string(),
                    description: non_empty(description.get_untracked()),
                };
                api::create_role(&dto).await.map(|_| ())
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
                        <Label>"Tên vai trò *"</Label>
                        <Input value=name />
                    </div>

                    <div class="form__group">
                        <Label>"Mô tả"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
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

/// Checkbox matrix over the whole permission catalog for one role.
///
/// Fetches both the fresh role (list rows may carry a stale join) and the
/// catalog on open; saving replaces the role's permission set wholesale.
#[component]
pub fn PermissionMatrix<F1, F2>(role: Role, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let role_id = role.id;
    let role_name = role.name.clone();

    let catalog: RwSignal<Vec<Permission>> = RwSignal::new(Vec::new());
    let selection = RwSignal::new(PermissionSelection::from_role(&role));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_permissions().await {
                Ok(permissions) => catalog.set(permissions),
                Err(e) => set_error.set(Some(e)),
            }
            match api::fetch_role(role_id).await {
                Ok(fresh) => selection.set(PermissionSelection::from_role(&fresh)),
                Err(e) => log::warn!("role refresh failed, using list row: {}", e),
            }
            set_loading.set(false);
        });
    });

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let payload = selection.with_untracked(|s| s.to_payload());
            match api::set_permissions(role_id, &payload).await {
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
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Phân quyền: {}", role_name)}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    {move || {
                        loading
                            .get()
                            .then(|| view! { <div class="modal-loading">"Đang tải danh mục quyền..."</div> })
                    }}

                    <For
                        each=move || catalog.with(|c| group_permissions(c))
                        key=|(group, _)| group.clone()
                        children=move |(group, permissions)| {
                            view! {
                                <div class="permission-group">
                                    <div class="permission-group__title">{group}</div>
                                    <For
                                        each=move || permissions.clone()
                                        key=|p| p.id
                                        children=move |permission| {
                                            let id = permission.id;
                                            view! {
                                                <label class="permission-row">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            selection.with(|s| s.contains(id))
                                                        }
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            selection.update(|s| s.set(id, checked));
                                                        }
                                                    />
                                                    <span class="permission-row__name">
                                                        {permission.name.clone()}
                                                    </span>
                                                    {permission
                                                        .description
                                                        .clone()
                                                        .map(|d| {
                                                            view! {
                                                                <span class="permission-row__desc">{d}</span>
                                                            }
                                                        })}
                                                </label>
                                            }
                                        }
                                    />
                                </div>
                            }
                        }
                    />
                </div>

                <div class="modal-footer">
                    <span class="modal-footer__hint">
                        {move || format!("Đã chọn {} quyền", selection.with(|s| s.len()))}
                    </span>
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
                        disabled=Signal::derive(move || saving.get() || loading.get())
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
    use super::group_permissions;
    use contracts::system::roles::Permission;

    fn permission(id: i64, name: &str, group: Option<&str>) -> Permission {
        Permission {
            id,
            name: name.to_string(),
            description: None,
            group: group.map(|g| g.to_string()),
        }
    }

    #[test]
    fn catalog_buckets_are_stable_and_sorted() {
        let catalog = vec![
            permission(4, "payroll.read", Some("payroll")),
            permission(1, "employee.write", Some("employee")),
            permission(2, "employee.read", Some("employee")),
            permission(9, "debug", None),
        ];
        let grouped = group_permissions(&catalog);
        assert_eq!(
            grouped.iter().map(|(g, _)| g.as_str()).collect::<Vec<_>>(),
            vec!["Khác", "employee", "payroll"]
        );
        let employee = &grouped[1].1;
        assert_eq!(employee[0].name, "employee.read");
        assert_eq!(employee[1].name, "employee.write");
    }

    #[test]
    fn blank_group_falls_back_to_ungrouped() {
        let grouped = group_permissions(&[permission(1, "x", Some("  "))]);
        assert_eq!(grouped[0].0, "Khác");
    }
}
