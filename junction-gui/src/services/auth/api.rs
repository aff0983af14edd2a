use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub city: String,
}

/// Profile object returned by the auth service. The service controls its
/// shape, only the fields displayed by the dashboard are typed and anything
/// else is carried along opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of a login response. The service answers with both fields set on
/// success and an arbitrary (possibly empty) body on rejection, so both are
/// optional and absence is treated as an application-level failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of a signup response. The service does not document its shape and the
/// client only cares that a well-formed JSON body came back with a 2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignupResponse(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serialization() {
        let request = LoginRequest {
            email: "job@hunter.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"email": "job@hunter.com", "password": "hunter2"})
        );
    }

    #[test]
    fn signup_request_serialization() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
            password: "secret".to_string(),
            city: "London".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phone"], "0123456789");
        assert_eq!(value["city"], "London");
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(response.user.is_none());
        assert!(response.token.is_none());

        let response: LoginResponse = serde_json::from_str(
            r#"{"user": {"name": "Ada", "email": "ada@example.com", "id": 42}, "token": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("abc123"));
        let user = response.user.unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.extra["id"], 42);
    }
}
