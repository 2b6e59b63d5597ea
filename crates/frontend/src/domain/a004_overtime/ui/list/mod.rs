mod state;

use contracts::domain::a001_employee::Employee;
use contracts::domain::a004_overtime::Overtime;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api as employee_api;
use crate::domain::a004_overtime::api;
use crate::shared::components::month_input::MonthInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{
    format_date, format_hours, format_time_opt, overtime_badge, EMPTY_PLACEHOLDER,
};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;
use state::create_state;

#[component]
pub fn OvertimeAdminList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();

    let employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Overtime>> = RwSignal::new(None);

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        spawn_local(async move {
            match api::list_admin(page, page_size, &filter).await {
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
            match employee_api::list_employees(1, 200, &Default::default()).await {
                Ok(result) => employees.set(result.data),
                Err(e) => log::warn!("employee options unavailable: {}", e),
            }
        });
    });

    let on_status_change = move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| s.update_filters(|f| f.status = value));
        load();
    };

    let on_month_change = move |value: String| {
        state.update(|s| s.update_filters(|f| f.month = value));
        load();
    };

    let on_employee_change = move |ev| {
        let selected = event_target_value(&ev).parse::<i64>().ok();
        state.update(|s| s.update_filters(|f| f.employee_id = selected));
        load();
    };

    let reset_filters = move |_| {
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

    let on_approve = move |id: i64| {
        spawn_local(async move {
            match api::approve(id).await {
                Ok(()) => {
                    toasts.success("Đã duyệt yêu cầu làm thêm");
                    load();
                }
                Err(e) => toasts.error(format!("Không thể duyệt yêu cầu: {}", e)),
            }
        });
    };

    let on_reject = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Từ chối yêu cầu làm thêm này?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::reject(id).await {
                Ok(()) => {
                    toasts.success("Đã từ chối yêu cầu làm thêm");
                    load();
                }
                Err(e) => toasts.error(format!("Không thể từ chối yêu cầu: {}", e)),
            }
        });
    };

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Xóa yêu cầu làm thêm này?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_admin(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa yêu cầu làm thêm");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa yêu cầu: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a004_overtime--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Làm thêm giờ"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm yêu cầu"
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
                            <select
                                class="filter-panel__select"
                                on:change=on_status_change
                                prop:value=move || state.with(|s| s.filters.status.clone())
                            >
                                <option value="">"Tất cả trạng thái"</option>
                                <option value="pending">"Chờ duyệt"</option>
                                <option value="approved">"Đã duyệt"</option>
                                <option value="rejected">"Từ chối"</option>
                            </select>
                            <MonthInput
                                value=Signal::derive(move || state.with(|s| s.filters.month.clone()))
                                on_change=Callback::new(on_month_change)
                            />
                            <select
                                class="filter-panel__select"
                                on:change=on_employee_change
                                prop:value=move || {
                                    state.with(|s| {
                                        s.filters
                                            .employee_id
                                            .map(|id| id.to_string())
                                            .unwrap_or_default()
                                    })
                                }
                            >
                                <option value="">"Tất cả nhân viên"</option>
                                <For each=move || employees.get() key=|e| e.id let:employee>
                                    <option value=employee.id.to_string()>
                                        {employee.full_name.clone()}
                                    </option>
                                </For>
                            </select>
                            <Button appearance=ButtonAppearance::Secondary on_click=reset_filters>
                                "Xóa lọc"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="overtime-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nhân viên"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Ngày"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Từ"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Đến"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Số giờ"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Lý do"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |request| {
                                    let id = request.id;
                                    let moderatable = request.status.is_moderatable();
                                    let for_edit = request.clone();
                                    let employee = request
                                        .employee
                                        .as_ref()
                                        .map(|e| e.display_name().to_string())
                                        .unwrap_or_else(|| format!("#{}", request.employee_id));
                                    let ot_date = format_date(&request.ot_date);
                                    let start = format_time_opt(request.start_time.as_deref());
                                    let end = format_time_opt(request.end_time.as_deref());
                                    let hours = format_hours(request.hours);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{ot_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{hours}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {request.reason.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge badge=overtime_badge(&request.status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {moderatable
                                                    .then(|| {
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_approve(id)
                                                                attr:title="Duyệt"
                                                            >
                                                                {icon("check")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_reject(id)
                                                                attr:title="Từ chối"
                                                            >
                                                                {icon("x")}
                                                            </Button>
                                                        }
                                                    })}
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
                            <super::details::OvertimeForm
                                existing=None
                                employees=employees
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo yêu cầu làm thêm");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|request| {
                        view! {
                            <super::details::OvertimeForm
                                existing=Some(request)
                                employees=employees
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật yêu cầu làm thêm");
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
