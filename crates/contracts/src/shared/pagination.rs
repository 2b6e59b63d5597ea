//! Pagination envelope shared by every list endpoint.
//!
//! The backend is not uniform: some endpoints answer `{data, pagination}`,
//! some `{items, total, page, pageSize}`, option feeds answer `{items}` or a
//! bare array. [`ListEnvelope`] accepts all of them and normalizes into the
//! single [`PageResult`] shape the rest of the code works with.

use serde::{Deserialize, Serialize};

/// Canonical pagination block: `{page, pageSize, total, totalPages}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl PageInfo {
    /// Recompute a consistent pagination block.
    ///
    /// `total_pages` is always `max(1, ceil(total / page_size))`, so an empty
    /// result still has one (empty) page, and `page` is clamped into
    /// `[1, total_pages]`. Server-sent `totalPages` is never trusted as-is.
    pub fn compute(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = ((total + page_size - 1) / page_size).max(1);
        let page = page.clamp(1, total_pages);
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

/// A normalized page of rows: what every gateway returns for a list call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> PageResult<T> {
    pub fn empty(page_size: usize) -> Self {
        Self {
            data: Vec::new(),
            pagination: PageInfo::compute(1, page_size, 0),
        }
    }
}

/// Union of the list shapes the backend actually emits.
///
/// Variant order matters for `untagged`: the most specific shapes come first,
/// otherwise `{items, total, page, pageSize}` would already match `Counted`'s
/// weaker siblings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `{data: [...], pagination: {...}}` — attendance, overtime, payroll admin.
    Paged { data: Vec<T>, pagination: PageInfo },
    /// `{items: [...], total, page, pageSize}` — employees, users.
    Counted {
        items: Vec<T>,
        total: usize,
        page: usize,
        #[serde(rename = "pageSize")]
        page_size: usize,
    },
    /// `{items: [...]}` — option feeds.
    ItemsOnly { items: Vec<T> },
    /// `{data: [...]}` — self-service payroll.
    Wrapped { data: Vec<T> },
    /// `[...]` — users-options, role names, permission catalogs.
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Normalize into a [`PageResult`].
    ///
    /// `requested_page`/`requested_page_size` fill the gaps for shapes that
    /// carry no pagination of their own (the whole result is one page then).
    pub fn into_page(self, requested_page: usize, requested_page_size: usize) -> PageResult<T> {
        match self {
            ListEnvelope::Paged { data, pagination } => PageResult {
                data,
                pagination: PageInfo::compute(
                    pagination.page,
                    pagination.page_size,
                    pagination.total,
                ),
            },
            ListEnvelope::Counted {
                items,
                total,
                page,
                page_size,
            } => PageResult {
                data: items,
                pagination: PageInfo::compute(page, page_size, total),
            },
            ListEnvelope::ItemsOnly { items }
            | ListEnvelope::Wrapped { data: items }
            | ListEnvelope::Bare(items) => {
                let total = items.len();
                let page_size = if requested_page_size == 0 {
                    total.max(1)
                } else {
                    requested_page_size
                };
                PageResult {
                    data: items,
                    pagination: PageInfo::compute(requested_page, page_size, total),
                }
            }
        }
    }

    /// Collapse to the rows alone, dropping pagination. Used for option feeds.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Paged { data, .. } => data,
            ListEnvelope::Counted { items, .. } => items,
            ListEnvelope::ItemsOnly { items } => items,
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceil_with_floor_of_one() {
        assert_eq!(PageInfo::compute(1, 10, 0).total_pages, 1);
        assert_eq!(PageInfo::compute(1, 10, 1).total_pages, 1);
        assert_eq!(PageInfo::compute(1, 10, 10).total_pages, 1);
        assert_eq!(PageInfo::compute(1, 10, 11).total_pages, 2);
        assert_eq!(PageInfo::compute(1, 10, 25).total_pages, 3);
    }

    #[test]
    fn page_is_clamped_into_valid_range() {
        let info = PageInfo::compute(7, 10, 25);
        assert_eq!(info.page, 3);
        let info = PageInfo::compute(0, 10, 25);
        assert_eq!(info.page, 1);
        // Empty list: single empty page, page pinned to 1
        let info = PageInfo::compute(4, 10, 0);
        assert_eq!(info.page, 1);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        let info = PageInfo::compute(1, 0, 25);
        assert_eq!(info.page_size, 1);
        assert_eq!(info.total_pages, 25);
    }

    #[test]
    fn parses_paged_envelope() {
        let json = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "pagination": {"page": 1, "pageSize": 10, "total": 2, "totalPages": 1}
        }"#;
        let env: ListEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let page = env.into_page(1, 10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn parses_counted_envelope_and_computes_total_pages() {
        let json = r#"{"items": [{"id": 1}], "total": 25, "page": 3, "pageSize": 10}"#;
        let env: ListEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let page = env.into_page(3, 10);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn parses_items_only_and_wrapped_and_bare() {
        let items: ListEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"items": [1, 2, 3]}"#).unwrap();
        assert_eq!(items.into_items().len(), 3);

        let wrapped: ListEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(wrapped.into_items().len(), 2);

        let bare: ListEnvelope<serde_json::Value> = serde_json::from_str(r#"[1]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);
    }

    #[test]
    fn unpaged_shapes_become_a_single_page() {
        let env: ListEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": [1, 2, 3]}"#).unwrap();
        let page = env.into_page(1, 20);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn server_total_pages_is_recomputed() {
        // Backend reporting a bogus totalPages must not leak through.
        let json = r#"{
            "data": [],
            "pagination": {"page": 2, "pageSize": 10, "total": 5, "totalPages": 99}
        }"#;
        let env: ListEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        let page = env.into_page(2, 10);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.page, 1);
    }
}
