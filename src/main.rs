#![warn(clippy::all, clippy::pedantic)]

use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hivelinks::{classify_url, extract_and_classify_urls};

/// `hivelinks` - URL classification for Hive social clients.
#[derive(Parser, Debug)]
#[command(name = "hivelinks")]
#[command(version)]
#[command(about = "Classify URLs the way a Hive client renders them.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one or more URLs, printing one JSON object per line
    Classify {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Extract and classify every URL in text read from stdin
    Scan {
        /// Pretty-print the JSON array
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Commands::Classify { urls } => {
            for raw in urls {
                let info = classify_url(&raw);
                println!("{}", serde_json::to_string(&info)?);
            }
        }
        Commands::Scan { pretty } => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            let infos = extract_and_classify_urls(&text);
            let out = if pretty {
                serde_json::to_string_pretty(&infos)?
            } else {
                serde_json::to_string(&infos)?
            };
            println!("{out}");
        }
    }

    Ok(())
}
