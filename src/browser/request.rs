use std::fmt;

use crate::api::DirectoryService;
use crate::error::AppResult;
use crate::model::DirectoryPage;

/// Monotonic tag attached to every issued fetch. Only the completion whose
/// tag matches the browser's current request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(pub(crate) u64);

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a fetched page combines with what is already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    Replace,
    Append,
}

/// A fetch the browser wants performed. The caller runs it (now, later, or
/// on another thread) and hands the outcome back with `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub tag: RequestTag,
    /// Search term; None for plain listing.
    pub query: Option<String>,
    pub skip: u64,
    pub limit: u64,
    pub merge: Merge,
}

impl FetchRequest {
    pub fn execute(&self, service: &dyn DirectoryService) -> AppResult<DirectoryPage> {
        match &self.query {
            Some(q) => service.search(q, self.skip, self.limit),
            None => service.list(self.skip, self.limit),
        }
    }
}
