use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PAGE_LIMIT: u64 = 30;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    pub page_limit: u64,
    pub search_debounce: Duration,
    /// Forwarded to login as `expiresInMins` when set.
    pub session_ttl_mins: Option<u32>,
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_limit: DEFAULT_PAGE_LIMIT,
            search_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            session_ttl_mins: None,
            db_path: PathBuf::from(".data").join("addrbook.db"),
        }
    }
}

impl Config {
    /// Defaults overridden by `ADDRBOOK_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("ADDRBOOK_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            timeout: env_parsed("ADDRBOOK_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            page_limit: env_parsed("ADDRBOOK_PAGE_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.page_limit),
            search_debounce: env_parsed("ADDRBOOK_DEBOUNCE_MS")
                .and_then(debounce_from_ms)
                .unwrap_or(defaults.search_debounce),
            session_ttl_mins: env_parsed("ADDRBOOK_SESSION_TTL_MINS"),
            db_path: defaults.db_path,
        }
    }

    pub fn with_db_path(mut self, path: PathBuf) -> Self {
        self.db_path = path;
        self
    }
}

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

fn debounce_from_ms(ms: u64) -> Option<Duration> {
    if ms > MAX_DEBOUNCE_MS {
        warn!(value = ms, max = MAX_DEBOUNCE_MS, "ignoring oversized search debounce");
        return None;
    }
    Some(Duration::from_millis(ms))
}
