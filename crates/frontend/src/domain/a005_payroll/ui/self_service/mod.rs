use contracts::domain::a005_payroll::Payroll;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_payroll::api;
use crate::shared::format::{format_currency, format_month, EMPTY_PLACEHOLDER};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SELF};

/// `"YYYY-MM"` compares lexicographically, so max is the newest period.
fn latest_payslip(rows: &[Payroll]) -> Option<&Payroll> {
    rows.iter().max_by(|a, b| a.month.cmp(&b.month))
}

/// Read-only payslip history for the signed-in employee.
#[component]
pub fn PayrollSelfService() -> impl IntoView {
    let rows: RwSignal<Vec<Payroll>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::list_mine().await {
                Ok(items) => rows.set(items),
                Err(e) => {
                    rows.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
            set_loaded.set(true);
        });
    };

    Effect::new(move |_| {
        if !loaded.get_untracked() {
            load();
        }
    });

    view! {
        <PageFrame page_id="a005_payroll--self" category=PAGE_CAT_SELF>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lương của tôi"</h1>
                    <Badge>{move || rows.with(|r| r.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Đang tải..." } else { " Tải lại" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || {
                    rows.with(|r| {
                        latest_payslip(r).map(|latest| {
                            let month = format_month(&latest.month);
                            let net = format_currency(latest.net_salary);
                            view! {
                                <div class="stat-cards">
                                    <div class="stat-card">
                                        <div class="stat-card__label">"Kỳ gần nhất"</div>
                                        <div class="stat-card__value">{month}</div>
                                    </div>
                                    <div class="stat-card">
                                        <div class="stat-card__label">"Thực lãnh"</div>
                                        <div class="stat-card__value">{net}</div>
                                    </div>
                                </div>
                            }
                        })
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:id="my-payroll-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=90.0>"Kỳ lương"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Lương cơ bản"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Phụ cấp"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Làm thêm"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Thưởng"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Khấu trừ"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Thực lãnh"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Ghi chú"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|r| r.id
                                children=move |payslip| {
                                    let month = format_month(&payslip.month);
                                    view! {
                                        <TableRow>
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
                                                <TableCellLayout truncate=true>
                                                    {payslip.note.clone().unwrap_or_else(|| EMPTY_PLACEHOLDER.into())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    {move || {
                        let empty = rows.with(|r| r.is_empty()) && !loading.get() && loaded.get();
                        empty.then(|| view! { <div class="table-empty">"Chưa có bảng lương nào"</div> })
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::latest_payslip;
    use contracts::domain::a005_payroll::Payroll;

    fn payslip(id: i64, month: &str) -> Payroll {
        Payroll {
            id,
            employee_id: 1,
            employee: None,
            month: month.to_string(),
            base_salary: 0.0,
            allowance: 0.0,
            overtime_pay: 0.0,
            bonus: 0.0,
            deduction: 0.0,
            net_salary: 0.0,
            note: None,
        }
    }

    #[test]
    fn newest_period_wins_regardless_of_order() {
        let rows = vec![
            payslip(1, "2025-06"),
            payslip(2, "2025-08"),
            payslip(3, "2025-07"),
        ];
        assert_eq!(latest_payslip(&rows).map(|p| p.id), Some(2));
        assert!(latest_payslip(&[]).is_none());
    }
}
