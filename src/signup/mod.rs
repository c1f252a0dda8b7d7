use std::sync::Arc;

use iced::Task;

use crate::form::{Field, SignupForm};
use crate::services::registration::{
    RegistrationBackend, RegistrationError, SignUpRequest, SignUpResponse,
};

pub const SUCCESS_NOTIFICATION: &str = "Account created. You can now log in.";
pub const FAILURE_NOTIFICATION: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
        }
    }
}

/// Fire-and-forget toast sink. Only submission outcomes reach it, local
/// validation errors stay on the form.
pub trait NotificationSink: Send + Sync {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// Collaborators the panel talks to. The shell provides the real
/// implementations, tests provide recording ones.
#[derive(Clone)]
pub struct SignupContext {
    pub backend: Arc<dyn RegistrationBackend>,
    pub notifications: Arc<dyn NotificationSink>,
    pub navigator: Arc<dyn Navigator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Field, String),
    Submit,
    Registered(Result<SignUpResponse, RegistrationError>),
}

#[derive(Debug, Default)]
pub struct SignupPanel {
    pub form: SignupForm,
    status: SubmissionStatus,
}

impl SignupPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    /// Submit button gate: a pending call or any direct field error blocks
    /// submission. A leftover `mismatch` alone does not.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.form.has_blocking_error()
    }

    /// Runs the full validation pass and, when the form is clean, flips the
    /// status to in-flight and hands back the request to send. `None` means
    /// the submission was rejected locally and no call must be made.
    pub fn start_submission(&mut self) -> Option<SignUpRequest> {
        if !self.form.validate_for_submit() {
            tracing::info!("signup rejected by local validation");
            return None;
        }
        self.status = SubmissionStatus::InFlight;
        Some(SignUpRequest {
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        })
    }

    pub fn update(&mut self, ctx: &SignupContext, message: Message) -> Task<Message> {
        match message {
            Message::FieldEdited(field, value) => {
                self.form.edit(field, value);
                Task::none()
            }
            Message::Submit => {
                let Some(request) = self.start_submission() else {
                    return Task::none();
                };
                tracing::info!("registering account for {}", request.email);
                let backend = ctx.backend.clone();
                Task::perform(
                    async move { backend.sign_up(request).await },
                    Message::Registered,
                )
            }
            Message::Registered(result) => {
                // Restored on every outcome so the user may retry.
                self.status = SubmissionStatus::Idle;
                match result {
                    Ok(response) => {
                        if let Some(message) = response.message {
                            tracing::warn!("registration refused: {}", message);
                            ctx.notifications.error(&message);
                        } else {
                            tracing::info!("registration succeeded");
                            ctx.notifications.success(SUCCESS_NOTIFICATION);
                            ctx.navigator.go_to(Route::Login);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("registration call failed: {}", e);
                        ctx.notifications.error(FAILURE_NOTIFICATION);
                    }
                }
                Task::none()
            }
        }
    }
}
