mod state;

use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use thaw::*;
use web_sys::window;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::debounce::Debouncer;
use crate::shared::format::{format_date_opt, user_badge, EMPTY_PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::toast::ToastService;
use crate::system::users::api::{self, UserListFilter};
use state::create_state;

fn default_page() -> usize {
    1
}

fn is_first_page(page: &usize) -> bool {
    *page <= 1
}

/// Mirror of the list filters in `location.search`, so a filtered view can
/// be bookmarked or pasted to a colleague. Default values stay out of the
/// string to keep shared links short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UrlQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    q: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    role: String,
    #[serde(default = "default_page", skip_serializing_if = "is_first_page")]
    page: usize,
}

impl Default for UrlQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            status: String::new(),
            role: String::new(),
            page: 1,
        }
    }
}

impl UrlQuery {
    fn from_state(filter: &UserListFilter, page: usize) -> Self {
        Self {
            q: filter.q.clone(),
            status: filter.status.clone(),
            role: filter.role.clone(),
            page,
        }
    }

    fn filter(&self) -> UserListFilter {
        UserListFilter {
            q: self.q.clone(),
            status: self.status.clone(),
            role: self.role.clone(),
        }
    }
}

fn read_url_query() -> UrlQuery {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default())
        .unwrap_or_default()
}

/// `replace_state` keeps the back button out of it; every filter keystroke
/// as a history entry would make "back" useless.
fn sync_url_query(query: &UrlQuery) {
    let Some(w) = window() else {
        return;
    };
    let query_string = serde_qs::to_string(query).unwrap_or_default();
    let desired = if query_string.is_empty() {
        String::new()
    } else {
        format!("?{}", query_string)
    };
    let current = w.location().search().unwrap_or_default();
    if current == desired {
        return;
    }
    let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, desired)),
        );
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();
    let debouncer = Debouncer::new();

    let initial = read_url_query();
    let search_input = RwSignal::new(initial.q.clone());
    if initial != UrlQuery::default() {
        let page = initial.page.max(1);
        let filter = initial.filter();
        state.update(|s| {
            s.set_filters(filter);
            // Direct write: the clamp in set_page would floor this to 1
            // because no totals are known before the first load.
            s.page = page;
        });
    }

    let role_names: RwSignal<Vec<String>> = RwSignal::new(Vec::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<User>> = RwSignal::new(None);
    let assigning: RwSignal<Option<User>> = RwSignal::new(None);

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        spawn_local(async move {
            match api::list_users(page, page_size, &filter).await {
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
        spawn_local(async move {
            match api::fetch_role_names().await {
                Ok(names) => role_names.set(names),
                Err(e) => log::warn!("role names unavailable: {}", e),
            }
        });
    });

    // Filters and page flow back into the address bar whenever they settle.
    Effect::new(move |_| {
        let query = state.with(|s| UrlQuery::from_state(&s.filters, s.page));
        sync_url_query(&query);
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

    let on_status_change = move |ev| {
        let value = event_target_value(&ev);
        debouncer.cancel();
        state.update(|s| {
            s.update_filters(|f| {
                f.q = search_input.get_untracked();
                f.status = value;
            })
        });
        load();
    };

    let on_role_change = move |ev| {
        let value = event_target_value(&ev);
        debouncer.cancel();
        state.update(|s| {
            s.update_filters(|f| {
                f.q = search_input.get_untracked();
                f.role = value;
            })
        });
        load();
    };

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

    let on_reset_password = move |id: i64| {
        let confirmed = window()
            .map(|w| {
                w.confirm_with_message("Đặt lại mật khẩu cho tài khoản này?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::reset_password(id).await {
                Ok(()) => toasts.success("Đã đặt lại mật khẩu"),
                Err(e) => toasts.error(format!("Không thể đặt lại mật khẩu: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Người dùng"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm người dùng"
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
                            <Input
                                value=search_input
                                placeholder="Tìm theo tên đăng nhập, email..."
                            />
                            <select
                                class="filter-panel__select"
                                on:change=on_status_change
                                prop:value=move || state.with(|s| s.filters.status.clone())
                            >
                                <option value="">"Tất cả trạng thái"</option>
                                <option value="active">"Hoạt động"</option>
                                <option value="inactive">"Đã khóa"</option>
                            </select>
                            <select
                                class="filter-panel__select"
                                on:change=on_role_change
                                prop:value=move || state.with(|s| s.filters.role.clone())
                            >
                                <option value="">"Tất cả vai trò"</option>
                                <For each=move || role_names.get() key=|n| n.clone() let:name>
                                    <option value=name.clone()>{name.clone()}</option>
                                </For>
                            </select>
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Xóa lọc"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="users-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=150.0>"Tên đăng nhập"</TableHeaderCell>
                                <TableHeaderCell min_width=170.0>"Họ tên"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Vai trò"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Ngày tạo"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|u| u.id
                                children=move |user| {
                                    let id = user.id;
                                    let for_edit = user.clone();
                                    let for_assign = user.clone();
                                    let role = user
                                        .role_name()
                                        .map(|r| r.to_string())
                                        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
                                    let created = format_date_opt(user.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {user.username.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.full_name.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user.email.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{role}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge badge=user_badge(&user.status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Sửa"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| assigning.set(Some(for_assign.clone()))
                                                    attr:title="Gán vai trò"
                                                >
                                                    {icon("roles")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_reset_password(id)
                                                    attr:title="Đặt lại mật khẩu"
                                                >
                                                    {icon("key")}
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
                            <super::details::UserForm
                                existing=None
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo người dùng");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|user| {
                        view! {
                            <super::details::UserForm
                                existing=Some(user)
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật người dùng");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    assigning.get().map(|user| {
                        view! {
                            <super::details::AssignRoleForm
                                user=user
                                role_names=role_names
                                on_close=move || assigning.set(None)
                                on_saved=move || {
                                    assigning.set(None);
                                    toasts.success("Đã gán vai trò");
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
    use super::UrlQuery;

    #[test]
    fn url_query_skips_defaults() {
        let query = UrlQuery {
            q: "lan".to_string(),
            status: String::new(),
            role: String::new(),
            page: 1,
        };
        assert_eq!(serde_qs::to_string(&query).unwrap(), "q=lan");
        assert_eq!(serde_qs::to_string(&UrlQuery::default()).unwrap(), "");
    }

    #[test]
    fn url_query_round_trips_a_shared_link() {
        let parsed: UrlQuery = serde_qs::from_str("q=lan&status=active&page=3").unwrap();
        assert_eq!(parsed.q, "lan");
        assert_eq!(parsed.status, "active");
        assert_eq!(parsed.role, "");
        assert_eq!(parsed.page, 3);

        let back = serde_qs::to_string(&parsed).unwrap();
        let reparsed: UrlQuery = serde_qs::from_str(&back).unwrap();
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn unknown_params_are_ignored() {
        let parsed: UrlQuery =
            serde_qs::from_str("utm_source=mail&q=an").unwrap_or_default();
        assert_eq!(parsed.q, "an");
        assert_eq!(parsed.page, 1);
    }
}
