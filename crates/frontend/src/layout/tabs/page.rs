use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};

/// Wrapper for one opened page. The content mounts once and stays alive;
/// switching tabs only toggles visibility, so list state survives.
#[component]
pub fn TabPage(tab: TabData, tabs: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs.active.get().as_deref() == Some(key_for_active.as_str());

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
