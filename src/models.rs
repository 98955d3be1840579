//! Frontend Models
//!
//! Payloads exchanged with the mini app backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for missing text fields on the dashboard
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for a missing share balance
pub const DEFAULT_SHARE_BALANCE: &str = "0.00 ETB";
/// Placeholder for a missing referral count
pub const DEFAULT_REFERRAL_COUNT: &str = "0";

/// Body of the status request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a str,
}

/// Status response (matches backend)
///
/// Unregistered users only get `{"is_registered": false}`, so every other
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub telegram_username: Option<String>,
    /// Usually a formatted string such as "0.00 ETB", but numbers are accepted
    #[serde(default)]
    pub share_balance: Option<Value>,
    #[serde(default)]
    pub referral_count: Option<Value>,
}

/// Dashboard fields, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardProfile {
    pub username: String,
    pub phone_number: String,
    pub telegram_username: String,
    pub share_balance: String,
    pub referral_count: String,
}

impl Default for DashboardProfile {
    fn default() -> Self {
        Self {
            username: NOT_AVAILABLE.to_string(),
            phone_number: NOT_AVAILABLE.to_string(),
            telegram_username: NOT_AVAILABLE.to_string(),
            share_balance: DEFAULT_SHARE_BALANCE.to_string(),
            referral_count: DEFAULT_REFERRAL_COUNT.to_string(),
        }
    }
}

impl From<&StatusResponse> for DashboardProfile {
    fn from(status: &StatusResponse) -> Self {
        Self {
            username: text_or(status.username.as_deref(), NOT_AVAILABLE),
            phone_number: text_or(status.phone_number.as_deref(), NOT_AVAILABLE),
            telegram_username: text_or(status.telegram_username.as_deref(), NOT_AVAILABLE),
            share_balance: value_or(status.share_balance.as_ref(), DEFAULT_SHARE_BALANCE, false),
            // A count of 0 is a real value and must not fall back
            referral_count: value_or(status.referral_count.as_ref(), DEFAULT_REFERRAL_COUNT, true),
        }
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn value_or(value: Option<&Value>, fallback: &str, keep_zero: bool) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => {
            if !keep_zero && n.as_f64() == Some(0.0) {
                fallback.to_string()
            } else {
                n.to_string()
            }
        }
        _ => fallback.to_string(),
    }
}

/// Body of the registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub telegram_id: i64,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Registration response (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub custom_user_id: Option<i64>,
    #[serde(default)]
    pub telegram_user_id: Option<i64>,
    #[serde(default)]
    pub created: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_status_parses() {
        let status: StatusResponse = serde_json::from_str(r#"{"is_registered": false}"#).unwrap();
        assert!(!status.is_registered);
        assert_eq!(status.username, None);
    }

    #[test]
    fn test_profile_defaults_for_missing_fields() {
        let status: StatusResponse = serde_json::from_str(r#"{"is_registered": true}"#).unwrap();
        let profile = DashboardProfile::from(&status);
        assert_eq!(profile, DashboardProfile::default());
    }

    #[test]
    fn test_profile_keeps_backend_values() {
        let status: StatusResponse = serde_json::from_str(
            r#"{
                "is_registered": true,
                "username": "telegram_user_42",
                "phone_number": "+251911000000",
                "telegram_username": null,
                "share_balance": "150.00 ETB",
                "referral_count": 0
            }"#,
        )
        .unwrap();
        let profile = DashboardProfile::from(&status);
        assert_eq!(profile.username, "telegram_user_42");
        assert_eq!(profile.phone_number, "+251911000000");
        assert_eq!(profile.telegram_username, "N/A");
        assert_eq!(profile.share_balance, "150.00 ETB");
        assert_eq!(profile.referral_count, "0");
    }

    #[test]
    fn test_profile_empty_strings_fall_back() {
        let status = StatusResponse {
            is_registered: true,
            username: Some(String::new()),
            share_balance: Some(Value::String(String::new())),
            ..Default::default()
        };
        let profile = DashboardProfile::from(&status);
        assert_eq!(profile.username, "N/A");
        assert_eq!(profile.share_balance, "0.00 ETB");
    }

    #[test]
    fn test_register_request_omits_missing_referral() {
        let req = RegisterRequest {
            telegram_id: 42,
            phone_number: "0911".to_string(),
            referral_code: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"telegram_id": 42, "phone_number": "0911"}));
    }

    #[test]
    fn test_status_request_uses_camel_case_key() {
        let json = serde_json::to_string(&StatusRequest { init_data: "a=b" }).unwrap();
        assert_eq!(json, r#"{"initData":"a=b"}"#);
    }
}
