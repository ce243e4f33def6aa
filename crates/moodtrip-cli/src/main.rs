use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use moodtrip_core::place::PlaceId;
use moodtrip_core::preference::PreferenceKind;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod render;

use context::AppContext;

#[derive(Parser)]
#[command(name = "moodtrip")]
#[command(about = "MoodTrip - find a travel destination that fits your mood", long_about = None)]
struct Cli {
    /// Place catalog JSON file (overrides the configured location)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Directory holding config, preferences and history files
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank places against answers given on the command line
    Match {
        /// Answer as category=score, e.g. calm=80 (repeatable)
        #[arg(short, long = "answer", value_name = "CATEGORY=SCORE", required = true)]
        answers: Vec<String>,

        /// Number of recommendations after the best match
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Take the mood survey interactively
    Survey,
    /// Manage bookmarked places
    Bookmark {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Manage visited places
    Visited {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Show statistics over past survey answers
    Insights {
        /// Category used for the trend and mood summary
        #[arg(short, long)]
        category: Option<String>,

        /// Delete all recorded answers
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// Mark a place
    Add { id: PlaceId },
    /// Unmark a place
    Remove { id: PlaceId },
    /// Mark or unmark a place depending on its current state
    Toggle { id: PlaceId },
    /// List marked places in the order they were marked
    List,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let context = AppContext::load(cli.data_dir, cli.catalog)?;
    init_tracing(&context.config.log_level);
    context.log_startup();

    match cli.command {
        Commands::Match { answers, limit } => {
            commands::recommend::run(&context, &answers, limit, cli.json)?
        }
        Commands::Survey => commands::survey::run(&context, cli.json).await?,
        Commands::Bookmark { action } => {
            commands::saved::run(&context, PreferenceKind::Bookmarked, action.into(), cli.json)
                .await?
        }
        Commands::Visited { action } => {
            commands::saved::run(&context, PreferenceKind::Visited, action.into(), cli.json)
                .await?
        }
        Commands::Insights { category, clear } => {
            commands::insights::run(&context, category, clear, cli.json).await?
        }
    }

    Ok(())
}

impl From<SavedAction> for commands::saved::Action {
    fn from(action: SavedAction) -> Self {
        match action {
            SavedAction::Add { id } => Self::Add(id),
            SavedAction::Remove { id } => Self::Remove(id),
            SavedAction::Toggle { id } => Self::Toggle(id),
            SavedAction::List => Self::List,
        }
    }
}
