use bookshelf::domain::covers::{Category, CoverRequest, generate_cover};

use crate::helpers::{assert_full_page, spawn_app, spawn_app_with_books, test_book};

#[tokio::test]
async fn bookshelf_page_lists_every_book() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert_full_page(&body);
    assert!(body.contains("The Seven Husbands of Evelyn Hugo"));
    assert!(body.contains("Taylor Jenkins Reid"));
    assert!(body.contains("The Silent Patient"));
    assert_eq!(body.matches("class=\"book-card ").count(), 6);
    assert!(body.contains("R$ 29.90"), "prices should be shown in reais");
    assert!(body.contains("4.5★"));
}

#[tokio::test]
async fn bookshelf_page_embeds_generated_covers() {
    let app = spawn_app_with_books(vec![test_book(
        1,
        "Dune",
        "Frank Herbert",
        Category::Fiction,
    )])
    .await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    let expected = generate_cover(&CoverRequest::new("Dune", "Frank Herbert", "fiction"));
    assert!(
        body.contains(&format!("src=\"{}\"", expected.to_data_uri())),
        "page should embed the cover as a data URI"
    );
    assert!(body.contains("href=\"/api/v1/books/1/cover\""));
    assert!(body.contains("$9.90"));
    assert!(body.contains("2 weeks"));
}

#[tokio::test]
async fn bookshelf_page_filters_by_category() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/?category=mystery"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert_full_page(&body);
    assert!(body.contains("The Silent Patient"));
    assert!(!body.contains("The Seven Husbands of Evelyn Hugo"));
    assert!(body.contains("shelf-tab shelf-tab--active\">Mystery</a>"));
    assert!(body.contains("Show every book"));
}

#[tokio::test]
async fn bookshelf_page_ignores_unknown_category_filter() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = client
        .get(app.page_url("/?category=poetry"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to read body");

    assert_eq!(body.matches("class=\"book-card ").count(), 6);
    assert!(body.contains("shelf-tab shelf-tab--active\">All</a>"));
}

#[tokio::test]
async fn empty_catalog_renders_placeholder() {
    let app = spawn_app_with_books(Vec::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No books on this shelf yet."));
}

#[tokio::test]
async fn stylesheet_is_served_with_cache_headers() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/static/bookshelf.css"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert_eq!(
        response.headers()["cache-control"].to_str().unwrap(),
        "public, max-age=604800"
    );
}

#[tokio::test]
async fn pages_carry_security_headers() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    let headers = response.headers();
    assert_eq!(headers["x-frame-options"].to_str().unwrap(), "DENY");
    assert!(
        headers["content-security-policy"]
            .to_str()
            .unwrap()
            .contains("img-src 'self' data:")
    );
}
