//! View-State Transitions
//!
//! Pure decisions behind the status and registration workflows, kept free
//! of DOM and network access.

use crate::error::{ApiError, RegistrationError};
use crate::models::{DashboardProfile, RegisterRequest, RegisterResponse, StatusResponse};
use crate::telegram::TelegramUser;

/// Which top-level screen is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Loading,
    Registration,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient banner message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Result of applying a status response to the UI
#[derive(Debug, Clone, PartialEq)]
pub struct StatusOutcome {
    pub view: View,
    pub profile: Option<DashboardProfile>,
    pub message: Option<Message>,
}

pub fn status_outcome(result: &Result<StatusResponse, ApiError>) -> StatusOutcome {
    match result {
        Ok(status) if status.is_registered => StatusOutcome {
            view: View::Dashboard,
            profile: Some(DashboardProfile::from(status)),
            message: None,
        },
        Ok(_) => StatusOutcome {
            view: View::Registration,
            profile: None,
            message: None,
        },
        // A failed status check still lets the user try to register
        Err(e) => StatusOutcome {
            view: View::Registration,
            profile: None,
            message: Some(Message::error(format!("Error loading status: {}. Please try again.", e))),
        },
    }
}

/// Build the registration payload from raw form input
pub fn validate_registration(
    phone_number: &str,
    referral_code: &str,
    user: Option<&TelegramUser>,
) -> Result<RegisterRequest, RegistrationError> {
    let phone_number = phone_number.trim();
    if phone_number.is_empty() {
        return Err(RegistrationError::MissingPhone);
    }

    let telegram_id = match user {
        Some(user) if user.id != 0 => user.id,
        _ => return Err(RegistrationError::MissingTelegramUser),
    };

    let referral_code = referral_code.trim();
    Ok(RegisterRequest {
        telegram_id,
        phone_number: phone_number.to_string(),
        referral_code: (!referral_code.is_empty()).then(|| referral_code.to_string()),
    })
}

/// Message to show after a registration attempt
pub fn registration_message(result: &Result<RegisterResponse, ApiError>) -> Message {
    match result {
        Ok(resp) if resp.success => {
            Message::success(non_empty(resp.message.as_deref()).unwrap_or("Registration successful!"))
        }
        Ok(resp) => {
            Message::error(non_empty(resp.message.as_deref()).unwrap_or("Registration failed. Please try again."))
        }
        Err(e) => Message::error(format!("Registration error: {}.", e)),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: i64) -> TelegramUser {
        TelegramUser {
            id,
            first_name: Some("Abebe".to_string()),
            last_name: None,
            username: None,
            language_code: None,
        }
    }

    #[test]
    fn test_unregistered_shows_registration() {
        let outcome = status_outcome(&Ok(StatusResponse::default()));
        assert_eq!(outcome.view, View::Registration);
        assert_eq!(outcome.profile, None);
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn test_registered_shows_dashboard() {
        let status = StatusResponse {
            is_registered: true,
            username: Some("telegram_user_7".to_string()),
            ..Default::default()
        };
        let outcome = status_outcome(&Ok(status));
        assert_eq!(outcome.view, View::Dashboard);
        let profile = outcome.profile.unwrap();
        assert_eq!(profile.username, "telegram_user_7");
        assert_eq!(profile.share_balance, "0.00 ETB");
    }

    #[test]
    fn test_status_error_falls_back_to_registration() {
        let err = ApiError::Status { status: 500, body: "boom".to_string() };
        let outcome = status_outcome(&Err(err));
        assert_eq!(outcome.view, View::Registration);
        assert_eq!(
            outcome.message,
            Some(Message::error("Error loading status: Server responded with 500: boom. Please try again."))
        );
    }

    #[test]
    fn test_validate_requires_phone() {
        let user = make_user(5);
        assert_eq!(validate_registration("   ", "", Some(&user)), Err(RegistrationError::MissingPhone));
    }

    #[test]
    fn test_validate_requires_user() {
        assert_eq!(validate_registration("0911", "", None), Err(RegistrationError::MissingTelegramUser));
        let user = make_user(0);
        assert_eq!(validate_registration("0911", "", Some(&user)), Err(RegistrationError::MissingTelegramUser));
    }

    #[test]
    fn test_validate_trims_and_drops_empty_referral() {
        let user = make_user(99);
        let req = validate_registration(" 0911223344 ", "  ", Some(&user)).unwrap();
        assert_eq!(req.telegram_id, 99);
        assert_eq!(req.phone_number, "0911223344");
        assert_eq!(req.referral_code, None);

        let req = validate_registration("0911223344", " REF123 ", Some(&user)).unwrap();
        assert_eq!(req.referral_code.as_deref(), Some("REF123"));
    }

    #[test]
    fn test_registration_messages() {
        let ok = RegisterResponse {
            success: true,
            message: Some("Registration successful! Your account is linked.".to_string()),
            ..Default::default()
        };
        assert_eq!(
            registration_message(&Ok(ok)),
            Message::success("Registration successful! Your account is linked.")
        );

        let rejected = RegisterResponse { success: false, message: None, ..Default::default() };
        assert_eq!(
            registration_message(&Ok(rejected)),
            Message::error("Registration failed. Please try again.")
        );

        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(
            registration_message(&Err(err)),
            Message::error("Registration error: Network error: Failed to fetch.")
        );
    }
}
