//! Print the leaderboard OpenAPI document as pretty JSON.
//!
//! ```sh
//! cargo run --bin openapi-dump > openapi.json
//! cargo run --bin openapi-dump -- --output docs/openapi.json
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::path::PathBuf;

use clap::Parser;
use leaderboard::ApiDoc;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Write the leaderboard OpenAPI document as JSON",
    version
)]
struct CliArgs {
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|error| io::Error::other(format!("serialise OpenAPI document: {error}")))?;

    match args.output {
        Some(path) => std::fs::write(&path, format!("{document}\n")).map_err(|error| {
            io::Error::other(format!("write {}: {error}", path.display()))
        }),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}
