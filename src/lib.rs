pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Crate version shown in the page footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
