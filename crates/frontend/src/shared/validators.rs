//! Field validators shared by the person forms.

/// Bangladeshi mobile numbers: exactly 11 digits.
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == 11 && value.chars().all(|c| c.is_ascii_digit())
}

/// `local@domain.tld`, no whitespace. Intentionally loose; the backend
/// re-validates.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// National ID numbers: 10 to 17 digits.
pub fn is_valid_nid(value: &str) -> bool {
    (10..=17).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_password(value: &str) -> bool {
    value.len() >= 6
}

/// "HH:MM" strings compare correctly as text; used by the time-range
/// checks on the routine forms.
pub fn time_range_valid(start: &str, end: &str) -> bool {
    !start.is_empty() && !end.is_empty() && start < end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_must_be_11_digits() {
        assert!(is_valid_mobile("01712345678"));
        assert!(!is_valid_mobile("0171234567"));
        assert!(!is_valid_mobile("017123456789"));
        assert!(!is_valid_mobile("01712a4567b"));
    }

    #[test]
    fn email_needs_at_and_dotted_domain() {
        assert!(is_valid_email("admin@school.edu"));
        assert!(is_valid_email("a.b@mail.example.com"));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@school"));
        assert!(!is_valid_email("@school.edu"));
        assert!(!is_valid_email("admin @school.edu"));
    }

    #[test]
    fn nid_length_bounds() {
        assert!(is_valid_nid("1234567890"));
        assert!(is_valid_nid("12345678901234567"));
        assert!(!is_valid_nid("123456789"));
        assert!(!is_valid_nid("123456789012345678"));
        assert!(!is_valid_nid("12345abcde"));
    }

    #[test]
    fn password_minimum_length() {
        assert!(is_valid_password("secret"));
        assert!(!is_valid_password("five5"));
    }

    #[test]
    fn time_range_end_after_start() {
        assert!(time_range_valid("09:00", "10:30"));
        assert!(!time_range_valid("10:30", "09:00"));
        assert!(!time_range_valid("09:00", "09:00"));
        assert!(!time_range_valid("", "10:00"));
    }
}
