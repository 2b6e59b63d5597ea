//! Generic state for paginated, filterable list pages.
//!
//! Every list page (employees, contracts, attendance, overtime, payroll,
//! users, roles) is an instantiation of the same machine: typed filter state,
//! a 1-based page window, a load that replaces rows wholesale, and mutations
//! that trigger reloads instead of patching rows in place. `ListStore` holds
//! that machine once; pages wrap it in an `RwSignal` and keep only wiring.
//!
//! Loads are guarded by a generation token: each `begin_load` invalidates all
//! earlier in-flight responses, so a slow page-2 response can never overwrite
//! the page-3 rows the user already navigated to.

use contracts::shared::pagination::{PageInfo, PageResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T, F> {
    pub items: Vec<T>,
    pub filters: F,
    /// 1-based; always within `[1, total_pages]` once loaded.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// First successful or failed load happened; gates the mount effect.
    pub is_loaded: bool,
    generation: u64,
}

impl<T, F: Default> Default for ListStore<T, F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T, F: Default> ListStore<T, F> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filters: F::default(),
            page: 1,
            page_size: page_size.max(1),
            total: 0,
            total_pages: 1,
            loading: false,
            error: None,
            is_loaded: false,
            generation: 0,
        }
    }
}

impl<T, F> ListStore<T, F> {
    /// Enter `Loading`: clears the error, bumps the generation and returns
    /// the token the eventual response must present.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Commit a page of rows. Returns `false` (state untouched) when a newer
    /// load has started since `token` was issued.
    pub fn apply_page(&mut self, token: u64, page: PageResult<T>) -> bool {
        if token != self.generation {
            return false;
        }
        let info = PageInfo::compute(
            page.pagination.page,
            page.pagination.page_size,
            page.pagination.total,
        );
        self.items = page.data;
        self.page = info.page;
        self.page_size = info.page_size;
        self.total = info.total;
        self.total_pages = info.total_pages;
        self.loading = false;
        self.is_loaded = true;
        true
    }

    /// Commit a failed load: rows are cleared, the message is kept for the
    /// banner. Stale failures are dropped like stale successes.
    pub fn apply_error(&mut self, token: u64, message: String) -> bool {
        if token != self.generation {
            return false;
        }
        self.items.clear();
        self.error = Some(message);
        self.loading = false;
        self.is_loaded = true;
        true
    }

    /// Navigate; the target is clamped into the known page range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    /// Changing the window size restarts from page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Any filter change restarts from page 1; stale offsets against a
    /// different result set would 404 or show gibberish.
    pub fn set_filters(&mut self, filters: F) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn update_filters(&mut self, apply: impl FnOnce(&mut F)) {
        apply(&mut self.filters);
        self.page = 1;
    }

    /// Page to reload after a successful delete: removing the only row of a
    /// page beyond the first steps back one page instead of landing on an
    /// empty window.
    pub fn page_after_delete(&self) -> usize {
        if self.items.len() == 1 && self.page > 1 {
            self.page - 1
        } else {
            self.page
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filters {
        q: String,
    }

    type Store = ListStore<u32, Filters>;

    /// In-memory stand-in for a paged list endpoint.
    fn server_page(rows: &[u32], page: usize, page_size: usize) -> PageResult<u32> {
        let info = PageInfo::compute(page, page_size, rows.len());
        let start = (info.page - 1) * info.page_size;
        let end = (start + info.page_size).min(rows.len());
        PageResult {
            data: rows.get(start..end).unwrap_or(&[]).to_vec(),
            pagination: info,
        }
    }

    fn load(store: &mut Store, rows: &[u32]) {
        let token = store.begin_load();
        let page = server_page(rows, store.page, store.page_size);
        assert!(store.apply_page(token, page));
    }

    #[test]
    fn twenty_five_rows_make_three_pages_of_ten() {
        let rows: Vec<u32> = (1..=25).collect();
        let mut store = Store::new(10);

        load(&mut store, &rows);
        assert_eq!(store.items.len(), 10);
        assert_eq!(store.total, 25);
        assert_eq!(store.total_pages, 3);

        store.set_page(3);
        load(&mut store, &rows);
        assert_eq!(store.items, (21..=25).collect::<Vec<u32>>());
        assert_eq!(store.page, 3);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let rows: Vec<u32> = (1..=25).collect();
        let mut store = Store::new(10);
        load(&mut store, &rows);

        store.set_page(99);
        assert_eq!(store.page, 3);

        // Even if a raw page number reaches the server, the response clamps.
        store.page = 99;
        load(&mut store, &rows);
        assert_eq!(store.page, 3);
        assert_eq!(store.items.len(), 5);
    }

    #[test]
    fn filter_and_page_size_changes_reset_to_page_one() {
        let mut store = Store::new(10);
        store.total_pages = 5;
        store.page = 4;

        store.update_filters(|f| f.q = "an".into());
        assert_eq!(store.page, 1);

        store.page = 4;
        store.set_page_size(50);
        assert_eq!(store.page, 1);
        assert_eq!(store.page_size, 50);

        store.page = 4;
        store.set_filters(Filters { q: String::new() });
        assert_eq!(store.page, 1);
    }

    #[test]
    fn deleting_the_last_row_of_a_later_page_steps_back() {
        let mut store = Store::new(10);
        store.page = 3;
        store.total_pages = 3;
        store.items = vec![21];
        assert_eq!(store.page_after_delete(), 2);

        // More than one row left: stay.
        store.items = vec![21, 22];
        assert_eq!(store.page_after_delete(), 3);

        // Page 1 never decrements.
        store.page = 1;
        store.items = vec![1];
        assert_eq!(store.page_after_delete(), 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let rows: Vec<u32> = (1..=25).collect();
        let mut store = Store::new(10);

        // User clicks page 2, then page 3 before the first response lands.
        store.set_page(2);
        store.total_pages = 3;
        let slow = store.begin_load();
        store.set_page(3);
        let fresh = store.begin_load();

        let fresh_page = server_page(&rows, 3, 10);
        assert!(store.apply_page(fresh, fresh_page));
        assert_eq!(store.page, 3);

        // The page-2 response arrives late and must not win.
        let slow_page = server_page(&rows, 2, 10);
        assert!(!store.apply_page(slow, slow_page));
        assert_eq!(store.page, 3);
        assert_eq!(store.items, (21..=25).collect::<Vec<u32>>());
        assert!(!store.loading);

        // Same for a late error from the superseded request.
        assert!(!store.apply_error(slow, "timeout".into()));
        assert!(store.error.is_none());
    }

    #[test]
    fn failed_load_clears_rows_and_keeps_message() {
        let rows: Vec<u32> = (1..=25).collect();
        let mut store = Store::new(10);
        load(&mut store, &rows);
        assert_eq!(store.items.len(), 10);

        let token = store.begin_load();
        assert!(store.loading);
        assert!(store.apply_error(token, "Không tải được danh sách".into()));
        assert!(store.items.is_empty());
        assert_eq!(store.error.as_deref(), Some("Không tải được danh sách"));
        assert!(!store.loading);

        // The next load clears the banner up front.
        store.begin_load();
        assert!(store.error.is_none());
    }

    #[test]
    fn create_then_reload_reflects_the_new_row() {
        let mut rows: Vec<u32> = (1..=9).collect();
        let mut store = Store::new(10);
        load(&mut store, &rows);
        assert_eq!(store.items.len(), 9);

        // Mutation path: POST succeeds server-side, then the page reloads.
        rows.push(10);
        load(&mut store, &rows);
        assert!(store.items.contains(&10));
        assert_eq!(store.total, 10);
    }

    #[test]
    fn delete_flow_reloads_the_adjusted_page() {
        let mut rows: Vec<u32> = (1..=21).collect();
        let mut store = Store::new(10);

        store.set_page(3);
        store.total_pages = 3;
        load(&mut store, &rows);
        assert_eq!(store.items, vec![21]);

        // DELETE succeeds, the sole row of page 3 is gone.
        rows.pop();
        let next = store.page_after_delete();
        assert_eq!(next, 2);
        store.set_page(next);
        load(&mut store, &rows);
        assert_eq!(store.page, 2);
        assert_eq!(store.items, (11..=20).collect::<Vec<u32>>());
        assert_eq!(store.total_pages, 2);
    }

    #[test]
    fn empty_result_keeps_one_page() {
        let mut store = Store::new(10);
        load(&mut store, &[]);
        assert!(store.items.is_empty());
        assert_eq!(store.total, 0);
        assert_eq!(store.total_pages, 1);
        assert_eq!(store.page, 1);
    }
}
