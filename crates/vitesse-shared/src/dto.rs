//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /user/auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

/// Answer to `POST /user/auth`.
///
/// The reference backend answers a rejected login with HTTP 200 and the
/// token `INVALID_TOKEN`; see [`AuthenticationResponse::is_rejected`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub token: String,
    pub is_admin: bool,
}

impl AuthenticationResponse {
    pub const INVALID_TOKEN: &'static str = "INVALID_TOKEN";

    pub fn is_rejected(&self) -> bool {
        self.token == Self::INVALID_TOKEN
    }
}

/// Body of `POST /user/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /candidate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCreationRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_web_address: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_keys() {
        let body = RegisterRequest {
            email: "jane@vitesse.com".into(),
            password: "secret".into(),
            first_name: "Jane".into(),
            last_name: "Roe".into(),
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Roe");
        assert_eq!(value["email"], "jane@vitesse.com");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn test_creation_request_omits_absent_optionals() {
        let body = CandidateCreationRequest {
            email: "john@example.com".into(),
            note: None,
            linkedin_web_address: Some("https://linkedin.com/in/john".into()),
            first_name: "John".into(),
            last_name: "Doe".into(),
            phone: "0612345678".into(),
        };

        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("note"));
        assert_eq!(value["linkedinWebAddress"], "https://linkedin.com/in/john");
        assert_eq!(value["phone"], "0612345678");
    }

    #[test]
    fn test_authentication_response_decodes() {
        let response: AuthenticationResponse =
            serde_json::from_str(r#"{"token":"T1","isAdmin":true}"#).unwrap();

        assert_eq!(response.token, "T1");
        assert!(response.is_admin);
        assert!(!response.is_rejected());
    }

    #[test]
    fn test_sentinel_token_is_rejected() {
        let response: AuthenticationResponse =
            serde_json::from_str(r#"{"token":"INVALID_TOKEN","isAdmin":false}"#).unwrap();

        assert!(response.is_rejected());
    }
}
