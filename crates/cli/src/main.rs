//! Quarry CLI — the main entry point.
//!
//! Commands:
//! - `serve`  — Start the HTTP gateway with the bundled chat UI
//! - `ask`    — Run a single question through the pipeline
//! - `doctor` — Check configuration and external-service reachability

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quarry",
    about = "Quarry — retrieval-augmented chat over a managed search index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        #[arg(short, long)]
        message: String,
    },

    /// Diagnose configuration and external dependencies
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the config reads the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask { message } => commands::ask::run(&message).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
