use std::fmt;

/// Why a field is currently refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Required,
    PolicyMismatch,
    ConfirmationMismatch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Required => write!(f, "This field is required"),
            Self::PolicyMismatch => write!(
                f,
                "Password must be at least 8 characters long and contain a lowercase letter, an uppercase letter, a digit and a special character"
            ),
            Self::ConfirmationMismatch => write!(f, "Passwords do not match"),
        }
    }
}

pub fn check_required(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        Some(ErrorCode::Required)
    } else {
        None
    }
}

/// Full password complexity rule. Only run at submission time, the
/// incremental path sticks to [`check_required`].
pub fn check_password_policy(value: &str) -> Option<ErrorCode> {
    if value.trim().is_empty() {
        return Some(ErrorCode::Required);
    }
    let compliant = value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| !c.is_ascii_alphanumeric());
    if compliant {
        None
    } else {
        Some(ErrorCode::PolicyMismatch)
    }
}

/// Submission-time confirmation rule: the confirmation must be present and
/// equal to the password.
pub fn check_confirmation(value: &str, other: &str) -> Option<ErrorCode> {
    if value.is_empty() {
        Some(ErrorCode::Required)
    } else if value != other {
        Some(ErrorCode::ConfirmationMismatch)
    } else {
        None
    }
}

/// Live cross-field rule applied while one of the password fields is being
/// edited: both sides must have content before a disagreement is reported.
pub fn check_mismatch(password: &str, confirmation: &str) -> Option<ErrorCode> {
    if !password.trim().is_empty() && !confirmation.trim().is_empty() && password != confirmation {
        Some(ErrorCode::ConfirmationMismatch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_whitespace() {
        assert_eq!(check_required(""), Some(ErrorCode::Required));
        assert_eq!(check_required("   \t"), Some(ErrorCode::Required));
        assert_eq!(check_required("a"), None);
        assert_eq!(check_required("  a  "), None);
    }

    #[test]
    fn password_policy_accepts_compliant_passwords() {
        assert_eq!(check_password_policy("Abcdef1!"), None);
        assert_eq!(check_password_policy("Str0ng pass!"), None);
    }

    #[test]
    fn password_policy_rejects_each_missing_class() {
        // no uppercase, digit or special
        assert_eq!(
            check_password_policy("abcdefgh"),
            Some(ErrorCode::PolicyMismatch)
        );
        // too short
        assert_eq!(
            check_password_policy("Abc1!"),
            Some(ErrorCode::PolicyMismatch)
        );
        // no digit
        assert_eq!(
            check_password_policy("Abcdefg!"),
            Some(ErrorCode::PolicyMismatch)
        );
        // no lowercase
        assert_eq!(
            check_password_policy("ABCDEF1!"),
            Some(ErrorCode::PolicyMismatch)
        );
        // no special character
        assert_eq!(
            check_password_policy("Abcdefg1"),
            Some(ErrorCode::PolicyMismatch)
        );
    }

    #[test]
    fn password_policy_reports_required_on_blank() {
        assert_eq!(check_password_policy(""), Some(ErrorCode::Required));
        assert_eq!(check_password_policy("   "), Some(ErrorCode::Required));
    }

    #[test]
    fn confirmation_rules() {
        assert_eq!(check_confirmation("", "whatever"), Some(ErrorCode::Required));
        assert_eq!(
            check_confirmation("abc", "abd"),
            Some(ErrorCode::ConfirmationMismatch)
        );
        assert_eq!(check_confirmation("abc", "abc"), None);
    }

    #[test]
    fn mismatch_needs_both_sides() {
        assert_eq!(check_mismatch("", "Abc12345!"), None);
        assert_eq!(check_mismatch("Abc12345!", ""), None);
        assert_eq!(check_mismatch("Abc12345!", "Abc12345!"), None);
        assert_eq!(
            check_mismatch("Abc12345!", "Abc12345!X"),
            Some(ErrorCode::ConfirmationMismatch)
        );
    }
}
