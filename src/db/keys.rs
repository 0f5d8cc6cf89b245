//! Keys under which client state is persisted.

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
/// JSON array of contact ids.
pub const FAVORITES: &str = "favorites";
/// JSON object holding the signed-in account snapshot.
pub const USER_DATA: &str = "user_data";

/// Everything that belongs to a session; cleared together on logout or 401.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN, REFRESH_TOKEN, USER_DATA];
