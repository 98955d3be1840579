//! Error Types
//!
//! Display output of these errors is shown to the user as-is.

use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built or sent
    #[error("Network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
    /// 2xx response whose body is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Registration form rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please enter your phone number.")]
    MissingPhone,
    #[error("Could not retrieve Telegram user ID. Please try again later.")]
    MissingTelegramUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 403, body: "Unauthorized: Invalid Telegram InitData".to_string() };
        assert_eq!(err.to_string(), "Server responded with 403: Unauthorized: Invalid Telegram InitData");
    }
}
