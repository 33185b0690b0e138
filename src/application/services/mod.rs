mod covers;

pub use covers::{CoverService, DEFAULT_COVER_CACHE_CAPACITY};
