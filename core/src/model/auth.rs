use serde::{Deserialize, Serialize};

use super::{type_enum::Role, user::User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(rename = "expiresInMins")]
    pub expires_in_mins: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Profile kept alongside the token once logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(u: &User) -> Self {
        SessionUser {
            id: u.id,
            first_name: u.first_name.clone(),
            last_name: (!u.last_name.is_empty()).then(|| u.last_name.clone()),
            email: u.email.clone().unwrap_or_default(),
            role: u.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_token_names() {
        let current = r#"{"id":1,"username":"emilys","accessToken":"a.b.c","refreshToken":"r"}"#;
        let rsp: LoginResponse = serde_json::from_str(current).unwrap();
        assert_eq!(rsp.access_token, "a.b.c");

        let legacy = r#"{"id":1,"username":"emilys","token":"x.y.z"}"#;
        let rsp: LoginResponse = serde_json::from_str(legacy).unwrap();
        assert_eq!(rsp.access_token, "x.y.z");
        assert!(rsp.refresh_token.is_none());
    }

    #[test]
    fn test_login_request_body() {
        let body = serde_json::to_value(LoginRequest {
            username: "emilys",
            password: "emilyspass",
            expires_in_mins: 30,
        })
        .unwrap();
        assert_eq!(body["expiresInMins"], 30);
        assert_eq!(body["username"], "emilys");
    }
}
