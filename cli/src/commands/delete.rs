//! DELETE command - Delete a bookmark.

use anyhow::Result;
use bookmarks_core::BookmarkId;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::{HumanReadable, make_empty_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Bookmark ID to delete
    pub bookmark_id: BookmarkId,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Outcome of a delete; the server itself answers with an empty 204.
#[derive(Debug, Serialize)]
pub struct DeletedBookmark {
    pub id: BookmarkId,
    pub deleted: bool,
}

impl HumanReadable for DeletedBookmark {
    fn print_human(&self) {
        println!("{}", "Bookmark deleted successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete bookmark {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.bookmark_id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!("{}/bookmark/{}", base_url, args.bookmark_id);

    make_empty_request(client.delete(&url)).await?;

    output(
        &DeletedBookmark {
            id: args.bookmark_id,
            deleted: true,
        },
        human,
    )
}
