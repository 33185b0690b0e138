use serde_json::Value;

use crate::helpers::{run_bookshelf, stdout};

#[test]
fn test_list_books_prints_catalog() {
    let output = run_bookshelf(&["book", "list"], &[]);

    let stdout = stdout(&output);
    let books: Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|_| panic!("Should output valid JSON, got: {}", stdout));

    let books = books.as_array().expect("Should be a JSON array");
    assert_eq!(books.len(), 6);
    assert_eq!(books[0]["title"], "The Seven Husbands of Evelyn Hugo");
    assert!(books[0]["id"].is_i64(), "Should have an ID");
}

#[test]
fn test_list_books_filters_by_category() {
    let output = run_bookshelf(&["book", "list", "--category", "romance"], &[]);

    let stdout = stdout(&output);
    let books: Vec<Value> = serde_json::from_str(&stdout).expect("Should output valid JSON");

    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b["category"] == "romance"));
}

#[test]
fn test_get_book_prints_single_book() {
    let output = run_bookshelf(&["book", "get", "--id", "3"], &[]);

    let stdout = stdout(&output);
    let book: Value = serde_json::from_str(&stdout).expect("Should output valid JSON");

    assert_eq!(book["title"], "The Silent Patient");
    assert_eq!(book["category"], "mystery");
}

#[test]
fn test_get_missing_book_fails() {
    let output = run_bookshelf(&["book", "get", "--id", "999"], &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "unexpected stderr: {stderr}");
}
