use serde::{Deserialize, Serialize};

use super::contact::Contact;
use crate::error::{AppError, AppResult};
use crate::validation;

/// Wire shape of `/users` and `/users/search`.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<Contact>,
    total: u64,
    skip: u64,
    limit: u64,
}

/// One fetched page of the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryPage {
    pub items: Vec<Contact>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl DirectoryPage {
    pub fn new(items: Vec<Contact>, total: u64, skip: u64, limit: u64) -> Self {
        Self {
            items,
            total,
            skip,
            limit,
        }
    }

    /// Parses and validates a raw response body. Missing or mistyped fields
    /// are rejected instead of being carried along as empty values.
    pub fn from_json(body: serde_json::Value) -> AppResult<Self> {
        let raw: UsersResponse = serde_json::from_value(body)
            .map_err(|e| AppError::InvalidResponse(format!("directory page: {}", e)))?;
        validation::page_fits(raw.users.len(), raw.limit)?;
        Ok(Self::new(raw.users, raw.total, raw.skip, raw.limit))
    }

    /// Offset to request next.
    pub fn next_skip(&self) -> u64 {
        self.skip + self.limit
    }

    /// True while the server holds entries beyond this page. An empty page
    /// always ends pagination.
    pub fn has_more(&self) -> bool {
        !self.items.is_empty() && self.next_skip() < self.total
    }
}
