pub mod notification;
pub mod page;
pub mod user;

/// local storage key of the session token, stored as a raw string
pub const TOKEN: &str = "userToken";
/// local storage key of the dark mode flag, stored as a json boolean
pub const DARK_MODE: &str = "darkMode";
