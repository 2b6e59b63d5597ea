use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// `YYYY-MM` for the month `offset` months before the current one.
pub fn month_value(offset: u32) -> String {
    let today = Utc::now().date_naive();
    let months = today.year() as i64 * 12 + today.month0() as i64 - offset as i64;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) + 1;
    format!("{:04}-{:02}", year, month)
}

/// Native month picker with quick jumps to the current and previous month.
/// Value is `YYYY-MM`; empty means "no month filter".
#[component]
pub fn MonthInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let quick_style = "height: 32px; padding: 0 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.75rem; background: #fff; color: #495057; cursor: pointer;";

    view! {
        <div style="display: flex; align-items: center; gap: 4px;">
            <input
                type="month"
                prop:value=value
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
                style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
            />
            <button
                on:click=move |_| on_change.run(month_value(0))
                style=quick_style
                title="Tháng hiện tại"
            >
                "Tháng này"
            </button>
            <button
                on:click=move |_| on_change.run(month_value(1))
                style=quick_style
                title="Tháng liền trước"
            >
                "-1T"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::month_value;

    #[test]
    fn month_values_are_well_formed() {
        for offset in 0..15 {
            let value = month_value(offset);
            let (y, m) = value.split_once('-').unwrap();
            assert_eq!(y.len(), 4);
            let month: u32 = m.parse().unwrap();
            assert!((1..=12).contains(&month), "bad month in {}", value);
        }
    }

    #[test]
    fn consecutive_offsets_differ_by_one_month() {
        let this = month_value(0);
        let prev = month_value(1);
        assert_ne!(this, prev);
        let (ty, tm) = this.split_once('-').unwrap();
        let (py, pm) = prev.split_once('-').unwrap();
        let t = ty.parse::<i32>().unwrap() * 12 + tm.parse::<i32>().unwrap();
        let p = py.parse::<i32>().unwrap() * 12 + pm.parse::<i32>().unwrap();
        assert_eq!(t - p, 1);
    }
}
