mod state;

use contracts::domain::a001_employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::debounce::Debouncer;
use crate::shared::format::{employee_badge, format_date_opt, EMPTY_PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;
use state::create_state;

fn account_label(employee: &Employee) -> String {
    match &employee.user {
        Some(user) => user
            .username
            .clone()
            .or_else(|| user.email.clone())
            .unwrap_or_else(|| format!("#{}", user.id)),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();
    let debouncer = Debouncer::new();

    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Employee>> = RwSignal::new(None);

    let search_input = RwSignal::new(String::new());
    let department_input = RwSignal::new(String::new());

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        spawn_local(async move {
            match api::list_employees(page, page_size, &filter).await {
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

    // Text filters apply 300ms after the last keystroke; the guard keeps
    // programmatic resets from scheduling a second load.
    Effect::new(move |_| {
        let q = search_input.get();
        let department = department_input.get();
        let unchanged = state
            .with_untracked(|s| s.filters.q == q && s.filters.department == department);
        if unchanged {
            return;
        }
        debouncer.schedule(move || {
            state.update(|s| {
                s.update_filters(|f| {
                    f.q = q;
                    f.department = department;
                })
            });
            load();
        });
    });

    let on_status_change = move |ev| {
        let value = event_target_value(&ev);
        debouncer.cancel();
        state.update(|s| {
            s.update_filters(|f| {
                f.q = search_input.get_untracked();
                f.department = department_input.get_untracked();
                f.status = value;
            })
        });
        load();
    };

    let reset_filters = move |_| {
        debouncer.cancel();
        search_input.set(String::new());
        department_input.set(String::new());
        state.update(|s| s.set_filters(Default::default()));
        load();
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| s.update_filters(|f| f.sort.toggle(field)));
            load();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        load();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load();
    };

    let on_delete = move |id: i64, name: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Xóa nhân viên \"{}\"?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_employee(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa nhân viên");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa nhân viên: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Nhân viên"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm nhân viên"
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
                            <div style="flex: 1; max-width: 280px;">
                                <Input
                                    value=search_input
                                    placeholder="Tìm theo tên hoặc email..."
                                />
                            </div>
                            <div style="max-width: 200px;">
                                <Input value=department_input placeholder="Phòng ban" />
                            </div>
                            <select
                                class="filter-panel__select"
                                on:change=on_status_change
                                prop:value=move || state.with(|s| s.filters.status.clone())
                            >
                                <option value="">"Tất cả trạng thái"</option>
                                <option value="active">"Đang làm việc"</option>
                                <option value="inactive">"Đã nghỉ việc"</option>
                            </select>
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Xóa lọc"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="employee-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor:pointer;"
                                        on:click=toggle_sort("full_name")
                                    >
                                        "Họ tên"
                                        {move || state.with(|s| s.filters.sort.indicator("full_name"))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Điện thoại"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Phòng ban"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Chức vụ"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>
                                    <div
                                        class="table__sortable-header"
                                        style="cursor:pointer;"
                                        on:click=toggle_sort("join_date")
                                    >
                                        "Ngày vào làm"
                                        {move || state.with(|s| s.filters.sort.indicator("join_date"))}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Tài khoản"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|e| e.id
                                children=move |employee| {
                                    let id = employee.id;
                                    let name = employee.full_name.clone();
                                    let for_edit = employee.clone();
                                    let join_date = format_date_opt(employee.join_date.as_deref());
                                    let account = account_label(&employee);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {employee.full_name.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.email.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {employee.phone.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.department.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.position.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{join_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge badge=employee_badge(&employee.status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{account}</TableCellLayout>
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
                                                    on_click=move |_| on_delete(id, name.clone())
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
                            <super::details::EmployeeForm
                                existing=None
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo nhân viên");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|employee| {
                        view! {
                            <super::details::EmployeeForm
                                existing=Some(employee)
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật nhân viên");
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
