use async_trait::async_trait;

use crate::domain::RepositoryError;
use crate::domain::book_items::Book;
use crate::domain::covers::Category;
use crate::domain::ids::BookId;
use crate::domain::repositories::BookRepository;

/// Read-only catalog held in memory.
#[derive(Clone)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new(mut books: Vec<Book>) -> Self {
        books.sort_by_key(|book| (book.ranking, book.id));
        Self { books }
    }

    /// Repository holding the bundled bestseller catalog.
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self, category: Option<Category>) -> Result<Vec<Book>, RepositoryError> {
        Ok(self
            .books
            .iter()
            .filter(|book| category.is_none_or(|c| book.category == c))
            .cloned()
            .collect())
    }

    async fn get(&self, id: BookId) -> Result<Book, RepositoryError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: i64,
    title: &str,
    author: &str,
    category: Category,
    ranking: u32,
    weeks_on_list: u32,
    rating: f64,
    readers: &str,
    price: f64,
) -> Book {
    Book {
        id: BookId::from(id),
        title: title.to_string(),
        author: author.to_string(),
        category,
        ranking,
        weeks_on_list,
        rating,
        readers: readers.to_string(),
        price,
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        book(
            1,
            "The Seven Husbands of Evelyn Hugo",
            "Taylor Jenkins Reid",
            Category::Romance,
            1,
            15,
            4.5,
            "2.1M",
            29.9,
        ),
        book(
            2,
            "Lessons in Chemistry",
            "Bonnie Garmus",
            Category::Fiction,
            1,
            42,
            4.5,
            "1.8M",
            34.9,
        ),
        book(
            3,
            "The Silent Patient",
            "Alex Michaelides",
            Category::Mystery,
            1,
            28,
            4.0,
            "3.4M",
            24.9,
        ),
        book(
            4,
            "It Ends with Us",
            "Colleen Hoover",
            Category::Romance,
            2,
            80,
            4.5,
            "4.2M",
            27.9,
        ),
        book(
            5,
            "Tomorrow, and Tomorrow, and Tomorrow",
            "Gabrielle Zevin",
            Category::Fiction,
            2,
            18,
            4.0,
            "950K",
            32.9,
        ),
        book(
            6,
            "The Thursday Murder Club",
            "Richard Osman",
            Category::Mystery,
            2,
            12,
            4.0,
            "1.1M",
            26.9,
        ),
    ]
}
