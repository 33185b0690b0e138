use bookshelf::domain::book_items::Book;
use bookshelf::domain::covers::{Category, CoverRequest, generate_cover};
use serde_json::Value;

use crate::helpers::{assert_well_formed_svg, spawn_app, spawn_app_with_books, test_book};

#[tokio::test]
async fn listing_books_returns_the_catalog_in_ranking_order() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let books: Vec<Book> = response.json().await.expect("Failed to parse response");
    assert_eq!(books.len(), 6);
    assert!(books.windows(2).all(|w| w[0].ranking <= w[1].ranking));
    assert_eq!(books[0].title, "The Seven Husbands of Evelyn Hugo");
}

#[tokio::test]
async fn listing_books_filters_by_category() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books?category=fiction"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let books: Vec<Book> = response.json().await.expect("Failed to parse response");
    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b.category == Category::Fiction));
}

#[tokio::test]
async fn listing_books_with_unknown_category_is_empty() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books?category=poetry"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let books: Vec<Book> = response.json().await.expect("Failed to parse response");
    assert!(books.is_empty());
}

#[tokio::test]
async fn getting_a_book_returns_its_fields() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books/1"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["title"], "The Seven Husbands of Evelyn Hugo");
    assert_eq!(book["author"], "Taylor Jenkins Reid");
    assert_eq!(book["category"], "romance");
    assert_eq!(book["weeks_on_list"], 15);
    assert_eq!(book["readers"], "2.1M");
}

#[tokio::test]
async fn getting_a_missing_book_returns_a_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books/999"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn getting_a_book_with_a_non_numeric_id_returns_a_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books/abc"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn book_cover_matches_the_generator() {
    let app = spawn_app_with_books(vec![test_book(
        1,
        "Gone Girl",
        "Gillian Flynn",
        Category::Mystery,
    )])
    .await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books/1/cover"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/svg+xml"
    );

    let body = response.text().await.expect("Failed to read body");
    assert_well_formed_svg(&body);

    let expected = generate_cover(&CoverRequest::new("Gone Girl", "Gillian Flynn", "mystery"));
    assert_eq!(body, expected.as_str());
}

#[tokio::test]
async fn cover_for_a_missing_book_returns_a_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books/999/cover"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}
