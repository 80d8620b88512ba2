//! LIST command - List all bookmarks.

use anyhow::Result;
use bookmarks_core::Bookmark;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// All bookmarks, in the order the server stored them.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BookmarkList(pub Vec<Bookmark>);

impl HumanReadable for BookmarkList {
    fn print_human(&self) {
        println!("{}", "Bookmarks".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No bookmarks yet)".dimmed());
            return;
        }

        for bookmark in &self.0 {
            bookmark.print_human();
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = format!("{}/bookmarks", base_url);

    let bookmarks: Vec<Bookmark> = make_request(client.get(&url)).await?;

    output(&BookmarkList(bookmarks), human)
}
