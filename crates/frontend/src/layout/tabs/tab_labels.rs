//! Single source of truth for tab titles, keyed by registry key.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_employee" => "Nhân viên",
        "a002_contract" => "Hợp đồng",
        "a003_attendance" => "Chấm công",
        "a003_attendance_self" => "Chấm công của tôi",
        "a004_overtime" => "Làm thêm giờ",
        "a004_overtime_self" => "Làm thêm của tôi",
        "a005_payroll" => "Bảng lương",
        "a005_payroll_self" => "Lương của tôi",
        "users" => "Người dùng",
        "roles" => "Vai trò & phân quyền",
        _ => "Không xác định",
    }
}

#[cfg(test)]
mod tests {
    use super::tab_label_for_key;

    #[test]
    fn every_registry_key_has_a_label() {
        let keys = [
            "a001_employee",
            "a002_contract",
            "a003_attendance",
            "a003_attendance_self",
            "a004_overtime",
            "a004_overtime_self",
            "a005_payroll",
            "a005_payroll_self",
            "users",
            "roles",
        ];
        for key in keys {
            assert_ne!(tab_label_for_key(key), "Không xác định", "{}", key);
        }
        assert_eq!(tab_label_for_key("nope"), "Không xác định");
    }
}
