//! Field checks shared by the contact and application forms.
//!
//! Each check records at most one code per field in [`ValidationErrors`] and
//! returns the accepted value, so a form can collect every failing field in a
//! single pass.

use validator::{ValidateEmail, ValidationError, ValidationErrors};

/// Minimum length of a first or last name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LENGTH: usize = 256;

/// Minimum length of a contact message, in characters.
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Maximum size of an uploaded résumé.
pub const MAX_RESUME_SIZE: usize = 5 * 1024 * 1024;

/// Leading bytes of every PDF file.
const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Records `code` against `field`.
pub fn reject(errors: &mut ValidationErrors, field: &'static str, code: &'static str) {
    errors.add(field, ValidationError::new(code));
}

/// Accepts any non-empty value, otherwise records `code`.
pub fn require(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    code: &'static str,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            reject(errors, field, code);
            None
        }
    }
}

/// Accepts a first or last name between the length limits.
pub fn check_name(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    let value = require(errors, field, value, "field_required")?;
    let length = value.chars().count();

    if length < MIN_NAME_LENGTH {
        reject(errors, field, "too_short_name");
        None
    } else if length > MAX_NAME_LENGTH {
        reject(errors, field, "too_long_name");
        None
    } else {
        Some(value)
    }
}

/// Accepts a syntactically valid email address.
pub fn check_email(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    let value = require(errors, field, value, "field_required")?;
    if value.validate_email() {
        Some(value)
    } else {
        reject(errors, field, "invalid_email");
        None
    }
}

/// Accepts a phone number in international form, returned as entered.
pub fn check_phone(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    let value = require(errors, field, value, "field_required")?;
    if is_valid_phone(&value) {
        Some(value)
    } else {
        reject(errors, field, "invalid_phone");
        None
    }
}

/// Returns whether `phone` is a dialable number in international form.
///
/// The number must carry its `+` country code and match the numbering plan
/// of that country. Spaces, dashes, dots and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    phonenumber::parse(None, phone).is_ok_and(|number| phonenumber::is_valid(&number))
}

/// Checks an uploaded résumé and returns the validation code it fails, if any.
///
/// The file must fit in [`MAX_RESUME_SIZE`], carry a `.pdf` extension in any
/// case, and start with the PDF signature.
pub fn validate_resume(file_name: &str, content: &[u8]) -> Option<&'static str> {
    if content.len() > MAX_RESUME_SIZE {
        return Some("file_too_large");
    }

    let has_extension = file_name.to_ascii_lowercase().ends_with(".pdf");
    if !has_extension || !content.starts_with(PDF_SIGNATURE) {
        return Some("invalid_file_type");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .into_iter()
            .filter(|(name, _)| name.to_string() == field)
            .flat_map(|(_, list)| list.iter().map(|e| e.code.to_string()).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn names_report_one_code() {
        let mut errors = ValidationErrors::new();
        assert!(check_name(&mut errors, "firstName", None).is_none());
        assert!(check_name(&mut errors, "lastName", Some("A".into())).is_none());
        assert_eq!(
            check_name(&mut errors, "firstName", Some("Hood".into())).as_deref(),
            Some("Hood")
        );

        assert_eq!(codes(&errors, "firstName"), ["field_required"]);
        assert_eq!(codes(&errors, "lastName"), ["too_short_name"]);
    }

    #[test]
    fn long_names_are_rejected() {
        let mut errors = ValidationErrors::new();
        assert!(check_name(&mut errors, "firstName", Some("a".repeat(257))).is_none());
        assert_eq!(codes(&errors, "firstName"), ["too_long_name"]);
    }

    #[test]
    fn arabic_names_count_characters() {
        let mut errors = ValidationErrors::new();
        assert!(check_name(&mut errors, "firstName", Some("هود".into())).is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn email_checks() {
        let mut errors = ValidationErrors::new();
        assert!(check_email(&mut errors, "email", Some("client@example.com".into())).is_some());
        assert!(check_email(&mut errors, "email", Some("not-an-email".into())).is_none());
        assert_eq!(codes(&errors, "email"), ["invalid_email"]);
    }

    #[test]
    fn phones_follow_the_numbering_plan() {
        assert!(is_valid_phone("+974 3312 3456"));
        assert!(is_valid_phone("+971 50 123 4567"));
        assert!(is_valid_phone("+1 (650) 253-0000"));
        assert!(is_valid_phone("+44 7400 123456"));
    }

    #[test]
    fn phones_outside_the_numbering_plan_are_rejected() {
        for phone in ["+12", "99", "+999 999", "+1 000", "+44 1", "+0123456", "call me", ""] {
            assert!(!is_valid_phone(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn phones_need_a_country_code() {
        assert!(!is_valid_phone("0501234567"));
        assert!(!is_valid_phone("33123456"));
    }

    #[test]
    fn resume_checks() {
        assert_eq!(validate_resume("cv.PDF", b"%PDF-1.7 body"), None);
        assert_eq!(
            validate_resume("cv.pdf", b"PK\x03\x04"),
            Some("invalid_file_type")
        );
        assert_eq!(
            validate_resume("cv.docx", b"%PDF-1.7"),
            Some("invalid_file_type")
        );

        let mut oversized = b"%PDF-".to_vec();
        oversized.resize(MAX_RESUME_SIZE + 1, 0);
        assert_eq!(validate_resume("cv.pdf", &oversized), Some("file_too_large"));
    }
}
