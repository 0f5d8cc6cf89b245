use std::sync::Arc;

use tracing::{info, warn};

use crate::api::AuthService;
use crate::db::{self, keys, KeyValueStore};
use crate::error::{AppError, AppResult};
use crate::model::{AuthUser, Credentials};
use crate::validation;

/// In-memory view of the signed-in account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owns the session lifecycle: login, rehydration from persisted data,
/// profile checks and logout.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    session: Session,
    session_ttl_mins: Option<u32>,
    error: Option<String>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            session: Session::default(),
            session_ttl_mins: None,
            error: None,
        }
    }

    /// Requested token lifetime forwarded with each login.
    pub fn with_session_ttl(mut self, minutes: Option<u32>) -> Self {
        self.session_ttl_mins = minutes;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn login(
        &mut self,
        auth: &dyn AuthService,
        username: &str,
        password: &str,
    ) -> AppResult<&Session> {
        let result = self.try_login(auth, username, password);
        match result {
            Ok(session) => {
                if let Some(user) = &session.user {
                    info!(username = %user.username, "logged in");
                }
                self.session = session;
                self.error = None;
                Ok(&self.session)
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.session = Session::default();
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn try_login(
        &self,
        auth: &dyn AuthService,
        username: &str,
        password: &str,
    ) -> AppResult<Session> {
        let mut credentials = Credentials::new(
            validation::non_blank(username, "username")?,
            validation::non_blank(password, "password")?,
        );
        credentials.expires_in_mins = self.session_ttl_mins;

        let response = auth.login(&credentials)?;
        let user_data = serde_json::to_string(&response.user)
            .map_err(|e| AppError::Storage(format!("user data: {}", e)))?;

        let persisted = self
            .store
            .set(keys::ACCESS_TOKEN, &response.access_token)
            .and_then(|_| self.store.set(keys::REFRESH_TOKEN, &response.refresh_token))
            .and_then(|_| self.store.set(keys::USER_DATA, &user_data));
        if let Err(e) = persisted {
            // never leave half a session behind
            db::clear_session_keys(self.store.as_ref());
            return Err(e);
        }

        Ok(Session {
            user: Some(response.user),
            access_token: Some(response.access_token),
            refresh_token: Some(response.refresh_token),
        })
    }

    /// Restores the session from the persisted user snapshot without asking
    /// the remote service.
    pub fn rehydrate(&mut self) -> AppResult<&Session> {
        match self.read_persisted() {
            Ok(session) => {
                self.session = session;
                self.error = None;
                Ok(&self.session)
            }
            Err(e) => {
                self.session = Session::default();
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn read_persisted(&self) -> AppResult<Session> {
        let raw = self.store.get(keys::USER_DATA)?.ok_or(AppError::NoSession)?;
        let user: AuthUser = serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("user data: {}", e)))?;
        Ok(Session {
            user: Some(user),
            access_token: self.store.get(keys::ACCESS_TOKEN)?,
            refresh_token: self.store.get(keys::REFRESH_TOKEN)?,
        })
    }

    /// Asks the remote service who the bearer token belongs to. Success
    /// refreshes the persisted snapshot; any failure ends the session.
    pub fn fetch_profile(&mut self, auth: &dyn AuthService) -> AppResult<&Session> {
        let fetched = auth.me().and_then(|user| {
            let raw = serde_json::to_string(&user)
                .map_err(|e| AppError::Storage(format!("user data: {}", e)))?;
            self.store.set(keys::USER_DATA, &raw)?;
            Ok(user)
        });
        match fetched {
            Ok(user) => {
                self.session.user = Some(user);
                self.error = None;
                Ok(&self.session)
            }
            Err(e) => {
                warn!(error = %e, "profile check failed; ending session");
                self.session = Session::default();
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Clears every persisted session key. Never fails.
    pub fn logout(&mut self) {
        db::clear_session_keys(self.store.as_ref());
        self.session = Session::default();
        self.error = None;
        info!("logged out");
    }
}
