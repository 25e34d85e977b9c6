//! Fixed setting keys

/// Bearer credential. Written only by the session layer.
pub const TOKEN: &str = "token";

/// Last-known user profile, stored as JSON.
pub const USER: &str = "user";

/// Theme preference (`light` or `dark`).
pub const THEME: &str = "theme";
