//! Common root element for every page mounted in a tab.
//!
//! Each page root carries `id="{entity}--{category}"` plus a
//! `data-page-category` attribute. The `--` separator makes the entity name
//! searchable: copy the id from the browser DOM inspector, paste into IDE
//! search, and you land in the matching `domain/` or `system/` directory.

use leptos::prelude::*;

/// List of records — table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Self-service page scoped to the signed-in employee.
pub const PAGE_CAT_SELF: &str = "self";

/// System administration page (users, roles).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] =
    &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SELF, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Root wrapper that sets standard metadata on every tab page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_employee--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SELF => "page page--self",
        _ => "page",
    };

    let mut full_class = base_class.to_string();
    if !class.is_empty() {
        full_class.push(' ');
        full_class.push_str(class);
    }

    view! {
        <div id=page_id data-page-category=category class=full_class>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("a001_employee--list"));
        assert!(is_valid_page_id("users--system"));
        assert!(!is_valid_page_id("a001_employee"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_employee--"));
    }

    #[test]
    fn categories_are_known() {
        for cat in ALL_CATEGORIES {
            assert!(is_known_category(cat));
        }
        assert!(!is_known_category("dashboard"));
    }
}
