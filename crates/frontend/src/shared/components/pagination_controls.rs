use crate::shared::icons::icon;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 50, 100];

/// Window of numbered page buttons around the current page, at most five
/// wide, clamped to `[1, total_pages]`.
pub fn page_window(page: usize, total_pages: usize) -> (usize, usize) {
    let total = total_pages.max(1);
    let page = page.clamp(1, total);
    let mut start = page.saturating_sub(2).max(1);
    let mut end = (page + 2).min(total);
    // Keep the window five wide while pages remain on either side.
    while end - start < 4 && end < total {
        end += 1;
    }
    while end - start < 4 && start > 1 {
        start -= 1;
    }
    (start, end)
}

fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "0 / 0".to_string();
    }
    let from = (page - 1) * page_size + 1;
    let to = (page * page_size).min(total);
    format!("{}–{} / {}", from, to, total)
}

/// Numbered pagination bar with prev/next arrows and a page-size selector.
/// Pages are 1-based throughout.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let numbers = move || {
        let page = current_page.get();
        let total = total_pages.get().max(1);
        let (start, end) = page_window(page, total);
        (start..=end).collect::<Vec<usize>>()
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get().max(1), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Trang trước"
            >
                {icon("chevron-left")}
            </button>
            <Show when=move || {
                page_window(current_page.get(), total_pages.get().max(1)).0 > 1
            }>
                <button class="pagination-btn" on:click=move |_| on_page_change.run(1)>
                    "1"
                </button>
                <span class="pagination-ellipsis">"…"</span>
            </Show>
            <For each=numbers key=|n| *n let:number>
                <button
                    class=move || {
                        if current_page.get() == number {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        }
                    }
                    on:click=move |_| on_page_change.run(number)
                >
                    {number.to_string()}
                </button>
            </For>
            <Show when=move || {
                let total = total_pages.get().max(1);
                page_window(current_page.get(), total).1 < total
            }>
                <span class="pagination-ellipsis">"…"</span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get().max(1))
                >
                    {move || total_pages.get().max(1).to_string()}
                </button>
            </Show>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get().max(1)
                title="Trang sau"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(10);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page_size.get() == size
                            >
                                {format!("{} / trang", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(page_window(5, 10), (3, 7));
        assert_eq!(page_window(1, 10), (1, 5));
        assert_eq!(page_window(2, 10), (1, 5));
        assert_eq!(page_window(10, 10), (6, 10));
        assert_eq!(page_window(9, 10), (6, 10));
    }

    #[test]
    fn window_never_leaves_range() {
        assert_eq!(page_window(1, 1), (1, 1));
        assert_eq!(page_window(2, 3), (1, 3));
        assert_eq!(page_window(99, 4), (1, 4));
        assert_eq!(page_window(1, 0), (1, 1));
    }

    #[test]
    fn range_labels() {
        assert_eq!(range_label(1, 10, 25), "1–10 / 25");
        assert_eq!(range_label(3, 10, 25), "21–25 / 25");
        assert_eq!(range_label(1, 10, 0), "0 / 0");
        assert_eq!(range_label(1, 10, 7), "1–7 / 7");
    }
}
