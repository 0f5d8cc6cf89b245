use super::{ApiClient, DirectoryService, SEARCH_PATH, USERS_PATH};
use crate::error::AppResult;
use crate::model::DirectoryPage;

impl DirectoryService for ApiClient {
    fn list(&self, skip: u64, limit: u64) -> AppResult<DirectoryPage> {
        let (skip, limit) = (skip.to_string(), limit.to_string());
        let body = self.get_json(USERS_PATH, &[("skip", skip.as_str()), ("limit", limit.as_str())])?;
        DirectoryPage::from_json(body)
    }

    fn search(&self, query: &str, skip: u64, limit: u64) -> AppResult<DirectoryPage> {
        let (skip, limit) = (skip.to_string(), limit.to_string());
        let body = self.get_json(
            SEARCH_PATH,
            &[("q", query), ("skip", skip.as_str()), ("limit", limit.as_str())],
        )?;
        DirectoryPage::from_json(body)
    }
}
