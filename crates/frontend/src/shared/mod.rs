pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_store;
pub mod page_frame;
pub mod query;
pub mod sort;
pub mod toast;
pub mod validate;
