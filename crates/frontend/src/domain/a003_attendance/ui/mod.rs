pub mod details;
pub mod list;
pub mod self_service;

pub use list::AttendanceAdminList;
pub use self_service::AttendanceSelfService;
