// Version information module for the trivia crate
//
// Provides version constants reported by the health endpoint and the server banner

/// Version string for the trivia crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
