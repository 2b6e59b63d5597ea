use leptos::ev;
use leptos::prelude::*;

use super::page::TabPage;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs = expect_context::<AppGlobalContext>();

    let tab_for_active = tab.clone();
    let is_active =
        Memo::new(move |_| tabs.active.get().as_deref() == Some(tab_for_active.key.as_str()));

    let tab_for_click = tab.clone();
    let on_click = move |_| tabs.activate_tab(&tab_for_click.key);

    let tab_for_close = tab.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs.close_tab(&tab_for_close.key);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab bar plus the stack of opened pages. Both iterate the same signal,
/// keyed by tab key, so a close drops the handle and its page together.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs = expect_context::<AppGlobalContext>();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || !tabs.opened.with(|opened| opened.is_empty())
                    fallback=|| {
                        view! {
                            <div class="tab-content__empty">
                                "Chọn một mục trong menu để bắt đầu"
                            </div>
                        }
                    }
                >
                    <For
                        each=move || tabs.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs=tabs /> }
                    />
                </Show>
            </div>
        </div>
    }
}
