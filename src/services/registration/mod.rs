pub mod client;
pub use client::*;

use async_trait::async_trait;

/// Seam between the signup panel and the remote registration service.
#[async_trait]
pub trait RegistrationBackend: std::fmt::Debug + Send + Sync {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, RegistrationError>;
}
