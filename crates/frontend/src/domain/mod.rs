pub mod a001_employee;
pub mod a002_contract;
pub mod a003_attendance;
pub mod a004_overtime;
pub mod a005_payroll;
