pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use strip::Tabs;
pub use tab_labels::tab_label_for_key;
