use contracts::domain::a004_overtime::{CreateOvertimeDto, Overtime};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_overtime::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{
    format_date, format_hours, format_time_opt, overtime_badge, EMPTY_PLACEHOLDER,
};
use crate::shared::icons::icon;
use crate::shared::list_store::ListStore;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SELF};
use crate::shared::toast::ToastService;

/// The signed-in employee's overtime requests with submit and withdraw.
#[component]
pub fn OvertimeSelfService() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let state = RwSignal::new(ListStore::<Overtime, ()>::default());
    let (show_request_form, set_show_request_form) = signal(false);

    let load = move || {
        let mut token = 0;
        state.update(|s| token = s.begin_load());
        let (page, page_size) = state.with_untracked(|s| (s.page, s.page_size));
        spawn_local(async move {
            match api::list_mine(page, page_size).await {
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

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        load();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load();
    };

    let on_withdraw = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Hủy yêu cầu làm thêm này?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_mine(id).await {
                Ok(()) => {
                    toasts.success("Đã hủy yêu cầu làm thêm");
                    let next = state.with_untracked(|s| s.page_after_delete());
                    state.update(|s| s.set_page(next));
                    load();
                }
                Err(e) => toasts.error(format!("Không thể hủy yêu cầu: {}", e)),
            }
        });
    };

    view! {
        <PageFrame page_id="a004_overtime--self" category=PAGE_CAT_SELF>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Làm thêm của tôi"</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_request_form.set(true)
                    >
                        {icon("plus")}
                        " Gửi yêu cầu"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Tải lại"
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
                            <span class="filter-panel__title">"Yêu cầu của tôi"</span>
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
                </div>

                <div class="table-wrapper">
                    <Table attr:id="my-overtime-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Ngày"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Từ"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Đến"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Số giờ"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Lý do"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |request| {
                                    let id = request.id;
                                    let withdrawable = request.status.is_moderatable();
                                    let ot_date = format_date(&request.ot_date);
                                    let start = format_time_opt(request.start_time.as_deref());
                                    let end = format_time_opt(request.end_time.as_deref());
                                    let hours = format_hours(request.hours);
                                    view! {
                                        <TableRow>
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
                                                {withdrawable
                                                    .then(|| {
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_withdraw(id)
                                                                attr:title="Hủy yêu cầu"
                                                            >
                                                                {icon("trash")}
                                                            </Button>
                                                        }
                                                    })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = state.with(|s| s.items.is_empty() && !s.loading && s.is_loaded);
                        empty.then(|| view! { <div class="table-empty">"Bạn chưa có yêu cầu làm thêm nào"</div> })
                    }}
                </div>

                {move || {
                    show_request_form.get().then(|| {
                        view! {
                            <OvertimeRequestForm
                                on_close=move || set_show_request_form.set(false)
                                on_saved=move || {
                                    set_show_request_form.set(false);
                                    toasts.success("Đã gửi yêu cầu làm thêm");
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

/// Request modal without an employee picker; the server infers the caller.
#[component]
fn OvertimeRequestForm<F1, F2>(on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let ot_date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let date = ot_date.get();
        if date.trim().is_empty() {
            set_error.set(Some("Vui lòng chọn ngày làm thêm".to_string()));
            return;
        }
        let time_start = start_time.get();
        let time_end = end_time.get();
        if time_start.trim().is_empty() || time_end.trim().is_empty() {
            set_error.set(Some("Vui lòng nhập giờ bắt đầu và kết thúc".to_string()));
            return;
        }
        if time_end.trim() <= time_start.trim() {
            set_error.set(Some("Giờ kết thúc phải sau giờ bắt đầu".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let reason_text = reason.get_untracked();
            let reason_text = reason_text.trim();
            let dto = CreateOvertimeDto {
                employee_id: None,
                ot_date: date.clone(),
                start_time: Some(format!("{}:00", time_start.trim())),
                end_time: Some(format!("{}:00", time_end.trim())),
                hours: None,
                reason: (!reason_text.is_empty()).then(|| reason_text.to_string()),
            };
            match api::create_mine(&dto).await {
                Ok(_) => on_saved(),
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
                    <h2 class="modal-title">"Gửi yêu cầu làm thêm"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Ngày làm thêm *"</Label>
                        <DateInput
                            value=Signal::derive(move || ot_date.get())
                            on_change=move |value| ot_date.set(value)
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ bắt đầu *"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || start_time.get()
                            on:input=move |ev| start_time.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Giờ kết thúc *"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || end_time.get()
                            on:input=move |ev| end_time.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Lý do"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
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
                        {move || if saving.get() { "Đang gửi..." } else { "Gửi yêu cầu" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
