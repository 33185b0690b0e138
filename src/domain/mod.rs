pub mod books;
pub mod covers;
pub mod errors;
pub mod formatting;
pub mod ids;
pub mod repositories;

// Re-exports
pub use books::books as book_items;
pub use errors::RepositoryError;
