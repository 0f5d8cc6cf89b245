use std::sync::Arc;

use tracing::{debug, info};

use crate::api::ApiClient;
use crate::browser::DirectoryBrowser;
use crate::config::Config;
use crate::db::{keys, KeyValueStore, SqliteStore};
use crate::error::AppResult;
use crate::ops::{FavoritesStore, SessionStore};

/// Everything a front-end needs, built once at start-up and passed around
/// explicitly.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub api: ApiClient,
    pub session: SessionStore,
    pub favorites: FavoritesStore,
    pub browser: DirectoryBrowser,
}

impl AppContext {
    /// Opens the SQLite store at `config.db_path`.
    pub fn open(config: Config) -> AppResult<Self> {
        let store = SqliteStore::open(&config.db_path)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let api = ApiClient::new(&config, store.clone());
        let session = SessionStore::new(store.clone()).with_session_ttl(config.session_ttl_mins);
        let favorites = FavoritesStore::new(store.clone());
        let browser = DirectoryBrowser::from_config(&config);
        Self {
            config,
            store,
            api,
            session,
            favorites,
            browser,
        }
    }

    /// Start-up sequence: restore a persisted session when an access token
    /// exists, then load favorites. A failed restore just leaves the user
    /// signed out.
    pub fn bootstrap(&mut self) {
        let has_token = matches!(self.store.get(keys::ACCESS_TOKEN), Ok(Some(_)));
        if has_token {
            match self.session.rehydrate() {
                Ok(_) => info!("session restored"),
                Err(e) => {
                    debug!(error = %e, "no session to restore");
                    self.session.clear_error();
                }
            }
        }
        self.favorites.load();
    }

    /// Ends the session and resets the directory view.
    pub fn logout(&mut self) {
        self.session.logout();
        self.browser = DirectoryBrowser::from_config(&self.config);
    }
}
