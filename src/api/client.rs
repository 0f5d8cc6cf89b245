use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::db::{self, keys, KeyValueStore};
use crate::error::{AppError, AppResult};

/// Blocking JSON client for the directory/auth service.
///
/// Every request carries the persisted access token as a bearer header when
/// one exists. A 401 from any endpoint clears the persisted session keys;
/// the in-memory session is left for the next explicit profile check.
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub(crate) fn get_json(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Value> {
        let mut request = self.agent.get(&self.url(path));
        for (name, value) in query {
            request = request.query(name, value);
        }
        debug!(path, ?query, "GET");
        self.handle(self.authorize(request).call())
    }

    pub(crate) fn post_json(&self, path: &str, body: &impl Serialize) -> AppResult<Value> {
        let request = self
            .agent
            .post(&self.url(path))
            .set("Content-Type", "application/json");
        debug!(path, "POST");
        self.handle(self.authorize(request).send_json(body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: ureq::Request) -> ureq::Request {
        match self.store.get(keys::ACCESS_TOKEN) {
            Ok(Some(token)) => request.set("Authorization", &format!("Bearer {}", token)),
            Ok(None) => request,
            Err(e) => {
                warn!(error = %e, "could not read access token; sending unauthenticated");
                request
            }
        }
    }

    fn handle(&self, result: Result<ureq::Response, ureq::Error>) -> AppResult<Value> {
        match result {
            Ok(response) => response
                .into_json::<Value>()
                .map_err(|e| AppError::InvalidResponse(format!("body is not JSON: {}", e))),
            Err(ureq::Error::Status(401, response)) => {
                warn!("unauthorized response; clearing persisted session");
                db::clear_session_keys(self.store.as_ref());
                Err(AppError::auth(
                    server_message(response).unwrap_or_else(|| "Unauthorized".into()),
                ))
            }
            Err(ureq::Error::Status(status, response)) => Err(AppError::Http {
                status,
                message: server_message(response).unwrap_or_else(|| "request failed".into()),
            }),
            Err(ureq::Error::Transport(t)) => Err(AppError::Network(t.to_string())),
        }
    }
}

/// Extracts `{"message": "..."}` from an error body, if present.
fn server_message(response: ureq::Response) -> Option<String> {
    let body: Value = response.into_json().ok()?;
    body.get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}
