use clap::{Parser, Subcommand};

/// CLI arguments for travel-cli
#[derive(Debug, Parser)]
#[command(
    name = "travel",
    version,
    about = "Search the travel recommendation dataset from your terminal"
)]
pub struct CliArgs {
    /// Path or http(s) URL of the dataset JSON (default: bundled travel_recommendation_api.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recommend up to two destinations for a keyword (beach, temple, country, or a name)
    Search {
        /// Keyword to search for (e.g. beaches, Japan)
        term: String,
    },

    /// Show a summary of the dataset contents
    Stats,

    /// List all countries with their cities, or only the named one
    Countries {
        /// Country name (case-insensitive, e.g. japan)
        name: Option<String>,
    },

    /// List every city whose name or country contains a substring (uncapped)
    Cities {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Read `search <term>`, `reset` and `quit` commands from stdin
    Interactive,
}
