use std::sync::Arc;

use crate::application::services::{CoverService, DEFAULT_COVER_CACHE_CAPACITY};
use crate::domain::repositories::BookRepository;
use crate::infrastructure::repositories::InMemoryBookRepository;

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    pub book_repo: Arc<dyn BookRepository>,
    pub cover_cache_capacity: usize,
}

impl Default for AppStateConfig {
    fn default() -> Self {
        Self {
            book_repo: Arc::new(InMemoryBookRepository::seeded()),
            cover_cache_capacity: DEFAULT_COVER_CACHE_CAPACITY,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub book_repo: Arc<dyn BookRepository>,
    pub cover_service: CoverService,
}

impl AppState {
    pub fn new(config: AppStateConfig) -> Self {
        Self {
            book_repo: config.book_repo,
            cover_service: CoverService::with_capacity(config.cover_cache_capacity),
        }
    }
}
