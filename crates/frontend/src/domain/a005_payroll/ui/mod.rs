pub mod details;
pub mod list;
pub mod self_service;

pub use list::PayrollAdminList;
pub use self_service::PayrollSelfService;
