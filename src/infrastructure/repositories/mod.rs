pub mod books;

pub use books::books::InMemoryBookRepository;
