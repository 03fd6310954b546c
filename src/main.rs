use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use docsi::docs::{IndexStore, SearchField};
use std::path::PathBuf;
use tracing::Level;

mod config;
mod format;
mod init;
mod search;

use config::Config;
use init::init_config;
use search::{interactive_search, list_pages, search_docs, show_location, show_stats};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "docsi")]
#[command(about = "Search the static search index of a documentation site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Search index to load (overrides index_path from docsi.toml)
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search entries by substring
    Search {
        /// Text to look for; empty lists every entry
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Field to search (repeatable; defaults to fields from docsi.toml)
        #[arg(short, long = "field", value_enum)]
        fields: Vec<FieldArg>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,
    },
    /// Show the entry at a location anchor
    Show {
        /// Anchor, e.g. "#WatchFish.Model"
        location: String,
    },
    /// List documented pages
    Pages,
    /// Show index statistics
    Stats,
    /// Interactive search prompt
    Interactive,
    /// Initialize a new docsi.toml configuration file
    Init {
        /// Overwrite existing docsi.toml if present
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Title,
    Text,
    Page,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => SearchField::Title,
            FieldArg::Text => SearchField::Text,
            FieldArg::Page => SearchField::Page,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load();

    // CLI flag overrides config file
    if let Some(index) = cli.index {
        config.index_path = index;
    }

    let result = match cli.command {
        Commands::Init { force } => init_config(force),
        command => load_store(&config).and_then(|store| run(command, &store, &config)),
    };

    if let Err(e) = result {
        eprintln!("\n{} {}", "❌".red(), e.red());
        std::process::exit(1);
    }
}

fn load_store(config: &Config) -> Result<IndexStore, String> {
    IndexStore::from_path(&config.index_path).map_err(|e| e.to_string())
}

fn run(command: Commands, store: &IndexStore, config: &Config) -> Result<(), String> {
    match command {
        Commands::Search {
            query,
            fields,
            limit,
            case_sensitive,
        } => {
            let mut options = config.search_options();
            if !fields.is_empty() {
                options = options.fields(fields.into_iter().map(SearchField::from));
            }
            if let Some(limit) = limit {
                options = options.limit(limit);
            }
            if case_sensitive {
                options = options.case_sensitive(true);
            }
            search_docs(store, config, &query.join(" "), &options)
        }
        Commands::Show { location } => show_location(store, &location),
        Commands::Pages => list_pages(store),
        Commands::Stats => show_stats(store),
        Commands::Interactive => interactive_search(store, config),
        Commands::Init { force } => init_config(force),
    }
}
