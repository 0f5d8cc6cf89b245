pub mod client;
pub mod directory_api;
pub mod auth_api;

pub use client::ApiClient;

use crate::error::AppResult;
use crate::model::{AuthUser, Credentials, DirectoryPage, LoginResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const PROFILE_PATH: &str = "/auth/me";
pub const USERS_PATH: &str = "/users";
pub const SEARCH_PATH: &str = "/users/search";

/// Paginated remote contact listing.
pub trait DirectoryService {
    fn list(&self, skip: u64, limit: u64) -> AppResult<DirectoryPage>;
    fn search(&self, query: &str, skip: u64, limit: u64) -> AppResult<DirectoryPage>;
}

/// Remote authentication endpoints.
pub trait AuthService {
    fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse>;
    /// Profile of the account owning the current bearer token.
    fn me(&self) -> AppResult<AuthUser>;
}
