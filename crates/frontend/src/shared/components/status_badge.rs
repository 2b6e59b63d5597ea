use leptos::prelude::*;

/// Colored status pill; pair up with the mapping helpers in `shared::format`
/// so every table colors a given status the same way.
#[component]
pub fn StatusBadge(
    /// `(label, css_class)` as returned by the `*_badge` helpers.
    badge: (&'static str, &'static str),
) -> impl IntoView {
    let (label, class) = badge;
    view! { <span class=class>{label}</span> }
}
