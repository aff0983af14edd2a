//! Validation rules for the two form personas. Error texts are the ones the
//! production backend's web client always displayed, kept verbatim.

pub const REQUIRED: &str = "Required";
pub const INVALID_EMAIL: &str = "Invalid Email";
pub const PHONE_LENGTH: &str = "Phone number must be 10 digits";

/// `name`, `city` and `password` only have to be non-empty.
pub fn required(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else {
        None
    }
}

pub fn email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else if email_address::EmailAddress::parse_with_options(
        value,
        email_address::Options::default().with_required_tld(),
    )
    .is_err()
    {
        Some(INVALID_EMAIL)
    } else {
        None
    }
}

/// The rule is a character count, not a digit check: a 10-character
/// non-numeric value passes, matching the original client.
pub fn phone(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else if value.chars().count() != 10 {
        Some(PHONE_LENGTH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        assert_eq!(required(""), Some(REQUIRED));
        assert_eq!(required("London"), None);
    }

    #[test]
    fn email_syntax() {
        assert_eq!(email(""), Some(REQUIRED));
        assert_eq!(email("not-an-address"), Some(INVALID_EMAIL));
        assert_eq!(email("missing@tld"), Some(INVALID_EMAIL));
        assert_eq!(email("ada@example.com"), None);
    }

    #[test]
    fn phone_is_a_length_check_not_a_digit_check() {
        assert_eq!(phone(""), Some(REQUIRED));
        assert_eq!(phone("123456789"), Some(PHONE_LENGTH));
        assert_eq!(phone("12345678901"), Some(PHONE_LENGTH));
        assert_eq!(phone("0123456789"), None);
        // 10 characters of anything pass.
        assert_eq!(phone("abcdefghij"), None);
    }
}
