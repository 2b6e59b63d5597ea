mod state;

use contracts::domain::a001_employee::Employee;
use contracts::domain::a005_payroll::Payroll;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_employee::api as employee_api;
use crate::domain::a005_payroll::api;
use crate::shared::components::month_input::MonthInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::{format_currency, format_month};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;
use state::create_state;

#[component]
pub fn PayrollAdminList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();

    let employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Payroll>> = RwSignal::new(None);

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

    let on_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Xóa bảng lương này?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa bảng lương");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa bảng lương: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a005_payroll--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Bảng lương"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm bảng lương"
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
                    <Table attr:id="payroll-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nhân viên"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Kỳ lương"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Lương cơ bản"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Phụ cấp"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Làm thêm"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Thưởng"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Khấu trừ"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Thực lãnh"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |payslip| {
                                    let id = payslip.id;
                                    let for_edit = payslip.clone();
                                    let employee = payslip
                                        .employee
                                        .as_ref()
                                        .map(|e| e.display_name().to_string())
                                        .unwrap_or_else(|| format!("#{}", payslip.employee_id));
                                    let month = format_month(&payslip.month);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{month}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(payslip.base_salary)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(payslip.allowance)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(payslip.overtime_pay)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(payslip.bonus)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(payslip.deduction)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 600;">
                                                        {format_currency(payslip.net_salary)}
                                                    </span>
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
                            <super::details::PayrollForm
                                existing=None
                                employees=employees
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo bảng lương");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|payslip| {
                        view! {
                            <super::details::PayrollForm
                                existing=Some(payslip)
                                employees=employees
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật bảng lương");
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
