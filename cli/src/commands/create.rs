//! CREATE command - Create a new bookmark.

use anyhow::Result;
use bookmarks_core::Bookmark;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use serde_json::Number;

use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Bookmark title
    #[arg(long)]
    pub title: String,

    /// Bookmarked URL
    #[arg(long)]
    pub url: String,

    /// Short description
    #[arg(long, short = 'd')]
    pub description: String,

    /// Rating (server defaults to 0)
    #[arg(long, short = 'r')]
    pub rating: Option<f64>,
}

/// Request body for creating a bookmark.
#[derive(Serialize)]
struct CreateBookmarkRequest {
    title: String,
    url: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<Number>,
}

/// Response from creating a bookmark.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreatedBookmark(pub Bookmark);

impl HumanReadable for CreatedBookmark {
    fn print_human(&self) {
        println!("{}", "Bookmark created successfully!".green().bold());
        println!();
        self.0.print_human();
    }
}

/// Whole-number ratings are sent as JSON integers.
fn rating_number(rating: f64) -> Option<Number> {
    if rating.fract() == 0.0 && rating.abs() < i64::MAX as f64 {
        Some(Number::from(rating as i64))
    } else {
        Number::from_f64(rating)
    }
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/bookmarks", base_url);

    let rating = match args.rating {
        Some(r) => Some(
            rating_number(r).ok_or_else(|| anyhow::anyhow!("Rating must be a finite number"))?,
        ),
        None => None,
    };

    let request_body = CreateBookmarkRequest {
        title: args.title,
        url: args.url,
        description: args.description,
        rating,
    };

    let bookmark: Bookmark = make_request(client.post(&url).json(&request_body)).await?;

    output(&CreatedBookmark(bookmark), human)
}
