use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Answer farm questions automatically or escalate them to an expert", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = agri_advisor::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a text question
    Ask {
        /// The question
        query: String,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Diagnose a plant photo
    Image {
        /// Path to a PNG, JPEG, WebP or GIF image
        path: PathBuf,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Answer questions from a file, one per line
    Batch {
        /// File with one question per line
        file: PathBuf,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List knowledge base entries
    Knowledge {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "agri_advisor=debug"
    } else {
        "agri_advisor=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ask { query, json } => {
            commands::ask::execute(&cli.config, &query, json)?;
        }
        Commands::Image { path, json } => {
            commands::image::execute(&cli.config, &path, json)?;
        }
        Commands::Batch { file, json } => {
            commands::batch::execute(&cli.config, &file, json)?;
        }
        Commands::Knowledge { json } => {
            commands::knowledge::execute(&cli.config, json)?;
        }
    }

    Ok(())
}
