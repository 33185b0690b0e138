pub mod books;
pub mod covers;

use std::net::SocketAddr;

use books::BookCommands;
use clap::{Args, Parser, Subcommand};
use covers::CoverCommand;

use crate::application::services::DEFAULT_COVER_CACHE_CAPACITY;

#[derive(Debug, Parser)]
#[command(author, version, about = "Bestseller shelf with generated book covers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Render a book cover as SVG
    Cover(CoverCommand),

    /// Browse the bundled catalog
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "BOOKSHELF_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    /// Distinct covers kept in memory before the cache is flushed
    #[arg(
        long,
        env = "BOOKSHELF_COVER_CACHE_CAPACITY",
        default_value_t = DEFAULT_COVER_CACHE_CAPACITY
    )]
    pub cover_cache_capacity: usize,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
