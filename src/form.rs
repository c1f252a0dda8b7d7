use crate::validation::{
    check_confirmation, check_mismatch, check_password_policy, check_required, ErrorCode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    PasswordConfirm,
}

/// The three input values and their last computed errors. Owned by the
/// signup panel, directly constructible in tests.
///
/// `mismatch` has its own lifecycle: it is only recomputed when one of the
/// password fields is edited, never by [`SignupForm::validate_for_submit`],
/// and it does not participate in submit gating.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,

    pub email_error: Option<ErrorCode>,
    pub password_error: Option<ErrorCode>,
    pub password_confirm_error: Option<ErrorCode>,
    pub mismatch: Option<ErrorCode>,
}

impl SignupForm {
    /// Single transition for an edit event: store the new value and refresh
    /// the errors that depend on it, reading the prior state for the sibling
    /// comparison. Password complexity is not checked here.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Email => {
                self.email = value;
                self.email_error = check_required(&self.email);
            }
            Field::Password => {
                self.mismatch = check_mismatch(&value, &self.password_confirm);
                self.password = value;
                self.password_error = check_required(&self.password);
            }
            Field::PasswordConfirm => {
                self.mismatch = check_mismatch(&self.password, &value);
                self.password_confirm = value;
                self.password_confirm_error = check_required(&self.password_confirm);
            }
        }
    }

    /// Full re-validation before a network call. Replaces the three direct
    /// error slots and reports whether the form is clean. `mismatch` keeps
    /// whatever the last edit computed.
    pub fn validate_for_submit(&mut self) -> bool {
        self.email_error = check_required(&self.email);
        self.password_error = check_password_policy(&self.password);
        self.password_confirm_error = check_confirmation(&self.password_confirm, &self.password);
        self.email_error.is_none()
            && self.password_error.is_none()
            && self.password_confirm_error.is_none()
    }

    /// True when one of the three direct error slots is set. `mismatch`
    /// alone does not block submission.
    pub fn has_blocking_error(&self) -> bool {
        self.email_error.is_some()
            || self.password_error.is_some()
            || self.password_confirm_error.is_some()
    }
}
