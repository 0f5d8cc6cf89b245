pub mod favorites_ops;
pub mod session_ops;

pub use favorites_ops::FavoritesStore;
pub use session_ops::{Session, SessionStore};
