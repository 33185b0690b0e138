use anyhow::Result;
use clap::{Args, Subcommand};

use super::print_json;
use crate::domain::covers::Category;
use crate::domain::ids::BookId;
use crate::domain::repositories::BookRepository;

#[derive(Debug, Subcommand)]
pub enum BookCommands {
    /// List catalog books
    List(ListBooksCommand),
    /// Get a catalog book by ID
    Get(GetBookCommand),
}

pub async fn run(repo: &dyn BookRepository, cmd: BookCommands) -> Result<()> {
    match cmd {
        BookCommands::List(c) => list_books(repo, c).await,
        BookCommands::Get(c) => get_book(repo, c).await,
    }
}

#[derive(Debug, Args)]
pub struct ListBooksCommand {
    /// Only books in this category
    #[arg(long)]
    pub category: Option<String>,
}

pub async fn list_books(repo: &dyn BookRepository, command: ListBooksCommand) -> Result<()> {
    let category = command.category.as_deref().map(Category::from_id);
    let books = repo.list(category).await?;
    print_json(&books)
}

#[derive(Debug, Args)]
pub struct GetBookCommand {
    #[arg(long)]
    pub id: i64,
}

pub async fn get_book(repo: &dyn BookRepository, command: GetBookCommand) -> Result<()> {
    let book = repo.get(BookId::from(command.id)).await?;
    print_json(&book)
}
