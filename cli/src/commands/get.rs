//! GET command - Show one bookmark.

use anyhow::Result;
use bookmarks_core::{Bookmark, BookmarkId};
use clap::Args;

use super::{make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Bookmark ID to show
    pub bookmark_id: BookmarkId,
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = format!("{}/bookmark/{}", base_url, args.bookmark_id);

    let bookmark: Bookmark = make_request(client.get(&url)).await?;

    output(&bookmark, human)
}
