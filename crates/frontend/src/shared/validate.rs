//! Client-side form checks mirroring the server's validation rules.
//!
//! The server remains authoritative; these only catch the obvious mistakes
//! before a round-trip.

/// Loose email shape check: something before and after a single `@`, and a
/// dot somewhere in the domain.
pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// `YYYY-MM` as produced by `<input type="month">`.
pub fn is_valid_month(value: &str) -> bool {
    let Some((y, m)) = value.trim().split_once('-') else {
        return false;
    };
    if y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(m.parse::<u32>(), Ok(n) if (1..=12).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("an.nguyen@congty.vn"));
        assert!(is_valid_email("  hr@example.com  "));
        assert!(!is_valid_email("an.nguyen"));
        assert!(!is_valid_email("@congty.vn"));
        assert!(!is_valid_email("an@"));
        assert!(!is_valid_email("an@congty"));
        assert!(!is_valid_email("an@@congty.vn"));
        assert!(!is_valid_email("an@.vn"));
    }

    #[test]
    fn min_len_counts_chars_not_bytes() {
        assert!(has_min_len("Trần Văn A", 6));
        assert!(has_min_len("  mật khẩu  ", 7));
        assert!(!has_min_len("ab", 3));
        assert!(!has_min_len("   ", 1));
    }

    #[test]
    fn month_inputs() {
        assert!(is_valid_month("2025-07"));
        assert!(is_valid_month("2025-12"));
        assert!(!is_valid_month("2025-13"));
        assert!(!is_valid_month("25-07"));
        assert!(!is_valid_month("2025"));
    }
}
