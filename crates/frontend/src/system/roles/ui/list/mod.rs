mod state;

use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::debounce::Debouncer;
use crate::shared::format::EMPTY_PLACEHOLDER;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::toast::ToastService;
use crate::system::roles::api;
use state::create_state;

fn permission_count(role: &Role) -> String {
    match &role.permissions {
        Some(list) => list.len().to_string(),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

#[component]
pub fn RoleList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();
    let debouncer = Debouncer::new();

    let search_input = RwSignal::new(String::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Role>> = RwSignal::new(None);
    let assigning: RwSignal<Option<Role>> = RwSignal::new(None);

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        spawn_local(async move {
            match api::list_roles(page, page_size, &filter).await {
                Ok(result) => state.update(|s| {
                    s.apply_page(token, result);
                }),
                Err(e) => state.update(|s| {
                    s.apply_error(token, e);
                }),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    Effect::new(move |_| {
        let q = search_input.get();
        let unchanged = state.with_untracked(|s| s.filters.q == q);
        if unchanged {
            return;
        }
        debouncer.schedule(move || {
            state.update(|s| s.update_filters(|f| f.q = q));
            load();
        });
    });

    let reset_filters = move |_| {
        debouncer.cancel();
        search_input.set(String::new());
        state.update(|s| s.set_filters(Default::default()));
        load();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        load();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load();
    };

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Xóa vai trò này?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_role(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa vai trò");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa vai trò: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="roles--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vai trò & phân quyền"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm vai trò"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Đang tải..." } else { " Tải lại" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Bộ lọc"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.total))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right"></div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Input value=search_input placeholder="Tìm theo tên vai trò..." />
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Xóa lọc"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="roles-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Tên vai trò"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Mô tả"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Số quyền"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |role| {
                                    let id = role.id;
                                    let for_edit = role.clone();
                                    let for_assign = role.clone();
                                    let count = permission_count(&role);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{role.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {role.description.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| assigning.set(Some(for_assign.clone()))
                                                    attr:title="Phân quyền"
                                                >
                                                    {icon("roles")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Sửa"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_delete(id)
                                                    attr:title="Xóa"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = state.with(|s| s.items.is_empty() && !s.loading && s.is_loaded);
                        empty.then(|| view! { <div class="table-empty">"Không có dữ liệu"</div> })
                    }}
                </div>

                {move || {
                    show_create_form.get().then(|| {
                        view! {
                            <super::details::RoleForm
                                existing=None
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo vai trò");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|role| {
                        view! {
                            <super::details::RoleForm
                                existing=Some(role)
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật vai trò");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    assigning.get().map(|role| {
                        view! {
                            <super::details::PermissionMatrix
                                role=role
                                on_close=move || assigning.set(None)
                                on_saved=move || {
                                    assigning.set(None);
                                    toasts.success("Đã cập nhật phân quyền");
                                    load();
                                }
                            />
                        }
                    })
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::permission_count;
    use contracts::system::roles::{Permission, Role};

    #[test]
    fn count_distinguishes_empty_join_from_missing_join() {
        let with = Role {
            id: 1,
            name: "hr".into(),
            description: None,
            permissions: Some(vec![Permission {
                id: 7,
                name: "employee.read".into(),
                description: None,
                group: None,
            }]),
        };
        let empty = Role {
            id: 2,
            name: "viewer".into(),
            description: None,
            permissions: Some(vec![]),
        };
        let missing = Role {
            id: 3,
            name: "new".into(),
            description: None,
            permissions: None,
        };
        assert_eq!(permission_count(&with), "1");
        assert_eq!(permission_count(&empty), "0");
        assert_eq!(permission_count(&missing), "—");
    }
}
