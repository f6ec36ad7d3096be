use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Credential issued by signup and signin.
///
/// The token is opaque to the client and is echoed back verbatim in the
/// `token` header of later requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
}
