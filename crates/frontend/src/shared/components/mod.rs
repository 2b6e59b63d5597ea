pub mod date_input;
pub mod month_input;
pub mod pagination_controls;
pub mod status_badge;
