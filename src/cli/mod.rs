// CLI module
// This module provides the command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barkeep")]
#[command(about = "Barkeep - bar assistant memory integration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all recipes from the recipe API and ingest them into the memory store
    Ingest {
        /// Override the recipe page size
        #[arg(long, env = "PAGE_SIZE")]
        page_size: Option<usize>,
    },

    /// Build an enriched search string from a raw user query
    Enrich {
        /// The raw user query
        query: String,
    },
}
