pub mod ids;
pub mod contact;
pub mod account;
pub mod page;
pub mod favorites;

// Re-exports for convenience
pub use ids::Id;
pub use contact::{Address, Company, Contact, Coordinates, Hair, Role};
pub use account::{AuthUser, Credentials, LoginResponse};
pub use page::DirectoryPage;
pub use favorites::FavoriteSet;
