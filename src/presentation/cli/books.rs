use anyhow::Result;
use clap::Subcommand;

use super::print_json;
use crate::infrastructure::client::SummaristClient;

#[derive(Debug, Subcommand)]
pub enum BookCommands {
    /// Show the book selected for you
    Selected,
    /// List recommended books
    Recommended,
    /// List suggested books
    Suggested,
    /// Show a book by id
    Get { id: String },
    /// Search books by author or title
    Search { query: String },
}

pub async fn run(client: &SummaristClient, command: BookCommands) -> Result<()> {
    let books = client.books();
    match command {
        BookCommands::Selected => print_json(&books.selected().await?),
        BookCommands::Recommended => print_json(&books.recommended().await?),
        BookCommands::Suggested => print_json(&books.suggested().await?),
        BookCommands::Get { id } => print_json(&books.get(&id).await?),
        BookCommands::Search { query } => print_json(&books.search(&query).await?),
    }
}
