//! Collapsible navigation menu. Every leaf opens a workspace tab.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "hr",
            label: "Nhân sự",
            icon: "employees",
            items: vec![
                ("a001_employee", "employees"),
                ("a002_contract", "contracts"),
            ],
        },
        MenuGroup {
            id: "timekeeping",
            label: "Chấm công",
            icon: "attendance",
            items: vec![
                ("a003_attendance", "attendance"),
                ("a003_attendance_self", "attendance"),
                ("a004_overtime", "overtime"),
                ("a004_overtime_self", "overtime"),
            ],
        },
        MenuGroup {
            id: "payroll",
            label: "Lương",
            icon: "payroll",
            items: vec![
                ("a005_payroll", "payroll"),
                ("a005_payroll_self", "payroll"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "Hệ thống",
            icon: "roles",
            items: vec![("users", "users"), ("roles", "roles")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let expanded_groups = RwSignal::new(vec!["hr".to_string()]);

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups
                .into_iter()
                .map(|group| {
                    let gid_for_click = group.id.to_string();
                    let gid_for_chevron = group.id.to_string();
                    let gid_for_show = group.id.to_string();
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    let gid = gid_for_click.clone();
                                    expanded_groups
                                        .update(move |open| {
                                            if let Some(pos) = open.iter().position(|x| x == &gid) {
                                                open.remove(pos);
                                            } else {
                                                open.push(gid);
                                            }
                                        });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)} <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&gid_for_chevron)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.get().contains(&gid_for_show)>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(key, icon_name)| {
                                            let item_key = StoredValue::new(key.to_string());
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        let active_key = item_key.get_value();
                                                        ctx.active.get().as_deref() == Some(active_key.as_str())
                                                    }
                                                    on:click=move |_| {
                                                        ctx.open_tab(key, tab_label_for_key(key));
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)} <span>{tab_label_for_key(key)}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
