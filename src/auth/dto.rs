use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for signup. Absent fields deserialize as empty strings and
/// are rejected by validation together with the empty ones.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{status, message}` envelope used by signup and the method fallback.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusMessage {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub user: UserSummary,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_serializes_flat() {
        let value = serde_json::to_value(StatusMessage::success("Signup successful!")).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Signup successful!");
    }

    #[test]
    fn signup_request_defaults_absent_fields_to_empty() {
        let request: SignupRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(request.email, "a@x.com");
        assert!(request.username.is_empty());
        assert!(request.password.is_empty());
        assert!(request.role.is_empty());
    }
}
