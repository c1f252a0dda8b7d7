use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RegistrationBackend;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// The registration endpoint answers with one of two shapes: a success
/// payload without `message`, or a refusal carrying a user-facing `message`.
/// Everything else on the payload is irrelevant to this screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegistrationError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Registration error: {}", self.error)
    }
}

impl std::error::Error for RegistrationError {}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        Self {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<reqwest::Response, RegistrationError> {
        let url = format!("{}/auth/{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl RegistrationBackend for RegistrationClient {
    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpResponse, RegistrationError> {
        let response = self.post_json("signup", &request).await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            // A refusal that reached us with a readable body is a business
            // answer, not a transport failure. Surface its message.
            let text = response.text().await?;
            let message = match serde_json::from_str::<SignUpResponse>(&text) {
                Ok(SignUpResponse {
                    message: Some(message),
                }) => message,
                _ if !text.is_empty() => text,
                _ => format!("Registration failed with status {}", status.as_u16()),
            };
            Ok(SignUpResponse {
                message: Some(message),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_keeps_base_url() {
        let client = RegistrationClient::new("http://localhost:3000/api/v1".to_string());
        assert_eq!(client.base_url, "http://localhost:3000/api/v1");
    }

    #[test]
    fn request_serializes_credentials() {
        let request = SignUpRequest {
            email: "a@b.com".to_string(),
            password: "Abc12345!".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"email": "a@b.com", "password": "Abc12345!"})
        );
    }

    #[test]
    fn success_shape_has_no_message() {
        let response: SignUpResponse =
            serde_json::from_str(r#"{"status":"ok","data":{"id":42,"email":"a@b.com"}}"#).unwrap();
        assert!(response.message.is_none());
    }

    #[test]
    fn refusal_shape_carries_its_message() {
        let response: SignUpResponse =
            serde_json::from_str(r#"{"message":"Email taken"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("Email taken"));
    }
}
