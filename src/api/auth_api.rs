use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiClient, AuthService, LOGIN_PATH, PROFILE_PATH};
use crate::error::{AppError, AppResult};
use crate::model::{AuthUser, Credentials, LoginResponse};

impl AuthService for ApiClient {
    fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        let body = self
            .post_json(LOGIN_PATH, credentials)
            .map_err(as_login_failure)?;
        parse(body, "login")
    }

    fn me(&self) -> AppResult<AuthUser> {
        let body = self.get_json(PROFILE_PATH, &[])?;
        parse(body, "profile")
    }
}

/// Login reports every transport or status failure as an auth failure,
/// keeping the server's message when it sent one.
fn as_login_failure(e: AppError) -> AppError {
    match e {
        AppError::Http { message, .. } => AppError::auth(message),
        AppError::Network(message) => AppError::auth(message),
        other => other,
    }
}

fn parse<T: DeserializeOwned>(body: Value, what: &str) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::InvalidResponse(format!("{}: {}", what, e)))
}
