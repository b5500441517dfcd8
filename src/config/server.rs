/// Server configuration constants.
///
/// Bind address and the CORS headers attached to every response.
pub const BIND_HOST: &str = "127.0.0.1";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "*";

/// Value of `Access-Control-Max-Age`, in seconds.
pub const CORS_MAX_AGE_SECS: u32 = 86400;
