mod state;

use contracts::domain::a002_contract::Contract;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_contract::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::debounce::Debouncer;
use crate::shared::export::{download_bytes, DOCX_MIME};
use crate::shared::format::{contract_badge, format_currency, format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;
use state::create_state;

pub fn contract_type_label(value: &str) -> &'static str {
    match value {
        "probation" => "Thử việc",
        "fixed_term" => "Có thời hạn",
        "indefinite" => "Không thời hạn",
        _ => "Khác",
    }
}

#[component]
pub fn ContractList() -> impl IntoView {
    let state = create_state();
    let toasts = expect_context::<ToastService>();
    let debouncer = Debouncer::new();

    let (show_create_form, set_show_create_form) = signal(false);
    let editing: RwSignal<Option<Contract>> = RwSignal::new(None);
    let search_input = RwSignal::new(String::new());

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size, filter) =
            state.with_untracked(|s| (s.page, s.page_size, s.filters.clone()));
        spawn_local(async move {
            match api::list_contracts(page, page_size, &filter).await {
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
        if state.with_untracked(|s| s.filters.q == q) {
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
                w.confirm_with_message("Xóa hợp đồng này?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_contract(id).await {
                Ok(()) => {
                    toasts.success("Đã xóa hợp đồng");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể xóa hợp đồng: {}", e)),
            }
        });
    };

    let on_export = move |id: i64| {
        spawn_local(async move {
            match api::export_contract(id).await {
                Ok(bytes) => {
                    let filename = format!("hop-dong-{}.docx", id);
                    match download_bytes(&bytes, &filename, DOCX_MIME) {
                        Ok(()) => toasts.success("Đã tải xuống hợp đồng"),
                        Err(e) => toasts.error(format!("Không thể tải tệp: {}", e)),
                    }
                }
                Err(e) => toasts.error(format!("Không thể xuất hợp đồng: {}", e)),
            }
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a002_contract--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Hợp đồng lao động"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Thêm hợp đồng"
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
                                    placeholder="Tìm theo tên nhân viên..."
                                />
                            </div>
                            <select
                                class="filter-panel__select"
                                on:change=on_status_change
                                prop:value=move || state.with(|s| s.filters.status.clone())
                            >
                                <option value="">"Tất cả trạng thái"</option>
                                <option value="valid">"Hiệu lực"</option>
                                <option value="expired">"Hết hạn"</option>
                                <option value="terminated">"Đã chấm dứt"</option>
                            </select>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="contract-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nhân viên"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Loại hợp đồng"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Ngày bắt đầu"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Ngày kết thúc"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Lương cơ bản"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|c| c.id
                                children=move |contract| {
                                    let id = contract.id;
                                    let for_edit = contract.clone();
                                    let employee = contract
                                        .employee
                                        .as_ref()
                                        .map(|e| e.display_name().to_string())
                                        .unwrap_or_else(|| format!("#{}", contract.employee_id));
                                    let start = format_date(&contract.start_date);
                                    let end = format_date_opt(contract.end_date.as_deref());
                                    let salary = format_currency(contract.base_salary);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{employee}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {contract_type_label(&contract.contract_type)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{start}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{end}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{salary}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge badge=contract_badge(&contract.status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| on_export(id)
                                                    attr:title="Xuất file Word"
                                                >
                                                    {icon("download")}
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
                            <super::details::ContractForm
                                existing=None
                                on_close=move || set_show_create_form.set(false)
                                on_saved=move || {
                                    set_show_create_form.set(false);
                                    toasts.success("Đã tạo hợp đồng");
                                    load();
                                }
                            />
                        }
                    })
                }}

                {move || {
                    editing.get().map(|contract| {
                        view! {
                            <super::details::ContractForm
                                existing=Some(contract)
                                on_close=move || editing.set(None)
                                on_saved=move || {
                                    editing.set(None);
                                    toasts.success("Đã cập nhật hợp đồng");
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
    use super::contract_type_label;

    #[test]
    fn contract_type_labels() {
        assert_eq!(contract_type_label("probation"), "Thử việc");
        assert_eq!(contract_type_label("indefinite"), "Không thời hạn");
        assert_eq!(contract_type_label("weird"), "Khác");
    }
}
