pub mod details;
pub mod list;
pub mod self_service;

pub use list::OvertimeAdminList;
pub use self_service::OvertimeSelfService;
