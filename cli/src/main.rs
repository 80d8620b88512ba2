//! Command-line interface for the bookmarks service.
//!
//! Commands:
//! - list: List all bookmarks
//! - create: Create a bookmark
//! - get: Fetch one bookmark
//! - delete: Delete a bookmark
//!
//! Configuration via environment:
//! - BOOKMARKS_URL: Base URL of the bookmarks server (default: http://localhost:8000)
//! - BOOKMARKS_TOKEN: Bearer token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{create::CreateArgs, delete::DeleteArgs, get::GetArgs, list::ListArgs};

/// Bookmarks CLI
///
/// Manage bookmarks from the command line. Prints JSON by default and
/// formatted text with --human.
#[derive(Parser)]
#[command(name = "bookmarks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookmarks server URL
    #[arg(
        long,
        env = "BOOKMARKS_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    url: String,

    /// Bearer token for authentication
    #[arg(long, env = "BOOKMARKS_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all bookmarks
    List(ListArgs),

    /// Create a new bookmark
    Create(CreateArgs),

    /// Show a single bookmark
    Get(GetArgs),

    /// Delete a bookmark
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, base_url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, base_url, cli.human, args).await
        }
        Commands::Get(args) => commands::get::execute(&client, base_url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, base_url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
