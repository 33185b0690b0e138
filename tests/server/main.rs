mod books_api;
mod pages;
