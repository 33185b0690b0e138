use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::book_items::Book;
use crate::domain::covers::Category;
use crate::domain::ids::BookId;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Books ordered by ranking, optionally restricted to one category.
    async fn list(&self, category: Option<Category>) -> Result<Vec<Book>, RepositoryError>;
    async fn get(&self, id: BookId) -> Result<Book, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Book>, RepositoryError> {
        self.list(None).await
    }
}
