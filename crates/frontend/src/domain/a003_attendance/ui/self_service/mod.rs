use contracts::domain::a003_attendance::Attendance;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_attendance::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::{format_date, format_hours, format_time_opt, EMPTY_PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::list_store::ListStore;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SELF};
use crate::shared::toast::ToastService;

fn today_status(record: &Option<Attendance>) -> String {
    match record {
        None => "Hôm nay bạn chưa chấm công".to_string(),
        Some(r) if r.is_open() => format!(
            "Đã vào lúc {}",
            format_time_opt(r.check_in.as_deref())
        ),
        Some(r) => format!(
            "Đã làm việc {} — {} ({} giờ)",
            format_time_opt(r.check_in.as_deref()),
            format_time_opt(r.check_out.as_deref()),
            format_hours(r.total_hours)
        ),
    }
}

/// Check-in/check-out panel plus the signed-in employee's own history.
#[component]
pub fn AttendanceSelfService() -> impl IntoView {
    let toasts = expect_context::<ToastService>();

    let today: RwSignal<Option<Attendance>> = RwSignal::new(None);
    let state = RwSignal::new(ListStore::<Attendance, ()>::default());
    let (punching, set_punching) = signal(false);

    let load_history = move || {
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

    let load_today = move || {
        spawn_local(async move {
            match api::fetch_today().await {
                Ok(record) => today.set(record),
                Err(e) => {
                    today.set(None);
                    log::warn!("today record unavailable: {}", e);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_today();
            load_history();
        }
    });

    let on_check_in = move |_| {
        set_punching.set(true);
        spawn_local(async move {
            match api::check_in().await {
                Ok(()) => {
                    toasts.success("Chấm công vào thành công");
                    load_today();
                    load_history();
                }
                Err(e) => toasts.error(format!("Không thể chấm công vào: {}", e)),
            }
            set_punching.set(false);
        });
    };

    let on_check_out = move |_| {
        set_punching.set(true);
        spawn_local(async move {
            match api::check_out().await {
                Ok(()) => {
                    toasts.success("Chấm công ra thành công");
                    load_today();
                    load_history();
                }
                Err(e) => toasts.error(format!("Không thể chấm công ra: {}", e)),
            }
            set_punching.set(false);
        });
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        load_history();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load_history();
    };

    let can_check_in =
        Signal::derive(move || today.with(|t| t.is_none()) && !punching.get());
    let can_check_out = Signal::derive(move || {
        today.with(|t| t.as_ref().map(|r| r.is_open()).unwrap_or(false)) && !punching.get()
    });

    view! {
        <PageFrame page_id="a003_attendance--self" category=PAGE_CAT_SELF>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Chấm công của tôi"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_today();
                            load_history();
                        }
                    >
                        {icon("refresh")}
                        " Tải lại"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="punch-card">
                    <div class="punch-card__status">
                        {move || today.with(today_status)}
                    </div>
                    <div class="punch-card__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_check_in
                            disabled=Signal::derive(move || !can_check_in.get())
                        >
                            "Chấm công vào"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_check_out
                            disabled=Signal::derive(move || !can_check_out.get())
                        >
                            "Chấm công ra"
                        </Button>
                    </div>
                </div>

                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })
                }}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <span class="filter-panel__title">"Lịch sử chấm công"</span>
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
                    <Table attr:id="my-attendance-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Ngày"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Giờ vào"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Giờ ra"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Số giờ"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Ghi chú"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|r| r.id
                                children=move |record| {
                                    let work_date = format_date(&record.work_date);
                                    let check_in = format_time_opt(record.check_in.as_deref());
                                    let check_out = format_time_opt(record.check_out.as_deref());
                                    let hours = format_hours(record.total_hours);
                                    view! {
                                        <TableRow>
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
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = state.with(|s| s.items.is_empty() && !s.loading && s.is_loaded);
                        empty.then(|| view! { <div class="table-empty">"Chưa có dữ liệu chấm công"</div> })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::today_status;
    use contracts::domain::a003_attendance::Attendance;

    fn record(check_in: Option<&str>, check_out: Option<&str>, hours: f64) -> Attendance {
        Attendance {
            id: 1,
            employee_id: 2,
            employee: None,
            work_date: "2025-08-26".to_string(),
            check_in: check_in.map(|s| s.to_string()),
            check_out: check_out.map(|s| s.to_string()),
            total_hours: hours,
            note: None,
        }
    }

    #[test]
    fn status_covers_all_three_phases() {
        assert_eq!(today_status(&None), "Hôm nay bạn chưa chấm công");
        assert_eq!(
            today_status(&Some(record(Some("2025-08-26T08:00:00Z"), None, 0.0))),
            "Đã vào lúc 08:00"
        );
        assert_eq!(
            today_status(&Some(record(
                Some("2025-08-26T08:00:00Z"),
                Some("2025-08-26T17:30:00Z"),
                8.5
            ))),
            "Đã làm việc 08:00 — 17:30 (8,5 giờ)"
        );
    }
}
