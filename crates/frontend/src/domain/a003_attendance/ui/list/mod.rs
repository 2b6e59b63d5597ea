mod state;

use contracts::domain::a001_employee::Employee;
use contracts::domain::a003_attendance::{Attendance, AttendanceSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api as employee_api;
use crate::domain::a003_attendance::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::month_input::MonthInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::{format_date, format_hours, format_time_opt, EMPTY_PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;
use state::create_state;

#[component]
fn SummaryCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceAdminList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();

    let summary: RwSignal<Option<AttendanceSummary>> = RwSignal::new(None);
    let employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Attendance>> = RwSignal::new(None);

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        let summary_filter = filter.clone();
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
        spawn_local(async move {
            match api::fetch_summary(&summary_filter).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => {
                    summary.set(None);
                    log::warn!("attendance summary unavailable: {}", e);
                }
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

    // Month and explicit range are alternative filters; picking one clears
    // the other so the server never sees both.
    let on_month_change = move |value: String| {
        state.update(|s| {
            s.update_filters(|f| {
                f.month = value;
                f.from = String::new();
                f.to = String::new();
            })
        });
        load();
    };

    let on_from_change = move |value: String| {
        state.update(|s| {
            s.update_filters(|f| {
                f.from = value;
                f.month = String::new();
            })
        });
        load();
    };

    let on_to_change = move |value: String| {
        state.update(|s| {
            s.update_filters(|f| {
                f.to = value;
                f.month = String::new();
            })
        });
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

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Xóa bản ghi chấm công này?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_record(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa bản ghi chấm công");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa bản ghi: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    let days_present = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.days_present.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
    });
    let days_completed = Signal::derive(move || {
        summary
            .get()
            .map(|s| s.days_completed.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
    });
    let total_hours = Signal::derive(move || {
        summary
            .get()
            .map(|s| format!("{} giờ", format_hours(s.total_hours)))
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
    });

    view! {
        <PageFrame page_id="a003_attendance--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Chấm công"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm bản ghi"
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

                <div class="stat-cards">
                    <SummaryCard label="Ngày có mặt" value=days_present />
                    <SummaryCard label="Ngày đủ công" value=days_completed />
                    <SummaryCard label="Tổng số giờ" value=total_hours />
                </div>

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
                            <MonthInput
                                value=Signal::derive(move || state.with(|s| s.filters.month.clone()))
                                on_change=Callback::new(on_month_change)
                            />
                            <DateInput
                                value=Signal::derive(move || state.with(|s| s.filters.from.clone()))
                                on_change=on_from_change
                            />
                            <DateInput
                                value=Signal::derive(move || state.with(|s| s.filters.to.clone()))
                                on_change=on_to_change
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
                    <Table attr:id="attendance-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nhân viên"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Ngày làm việc"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Giờ vào"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Giờ ra"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Số giờ"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Ghi chú"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |record| {
                                    let id = record.id;
                                    let for_edit = record.clone();
                                    let employee = record
                                        .employee
                                        .as_ref()
                                        .map(|e| e.display_name().to_string())
                                        .unwrap_or_else(|| format!("#{}", record.employee_id));
                                    let work_date = format_date(&record.work_date);
                                    let check_in = format_time_opt(record.check_in.as_deref());
                                    let check_out = format_time_opt(record.check_out.as_deref());
                                    let hours = format_hours(record.total_hours);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{work_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{check_in}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{check_out}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{hours}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {record.note.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
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
                            <super::details::AttendanceForm
                                existing=None
                                employees=employees
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo bản ghi chấm công");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|record| {
                        view! {
                            <super::details::AttendanceForm
                                existing=Some(record)
                                employees=employees
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật bản ghi chấm công");
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
