use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Plain confirmation returned after register or login.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_serialization() {
        let response = MessageResponse {
            message: "Login successful".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Login successful"}"#);
    }

    #[test]
    fn register_request_requires_both_fields() {
        let err = serde_json::from_str::<RegisterRequest>(r#"{"username":"alice"}"#);
        assert!(err.is_err());
    }
}
