use leptos::prelude::*;

const BASE_STYLE: &str = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";

/// Native date picker bound to a `yyyy-mm-dd` string signal. The browser
/// renders the vi-VN dd/MM/yyyy order on its own; the wire value stays ISO.
#[component]
pub fn DateInput(
    /// Current value, `yyyy-mm-dd` or empty.
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new `yyyy-mm-dd` value, empty string when cleared.
    on_change: impl Fn(String) + 'static,
    /// CSS width, 140px unless overridden.
    #[prop(optional)]
    width: Option<&'static str>,
) -> impl IntoView {
    let style = format!("{} width: {};", BASE_STYLE, width.unwrap_or("140px"));

    view! {
        <input
            type="date"
            style=style
            prop:value=value
            on:input=move |ev| on_change(event_target_value(&ev))
        />
    }
}
