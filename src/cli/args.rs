//! CLI argument definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use super::config::CostConfig;

#[derive(Parser)]
#[command(name = "med")]
#[command(about = "Weighted minimum edit distance between strings")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path (.json)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Cost overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CostArgs {
    /// Cost of inserting one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub insert_cost: Option<i64>,

    /// Cost of deleting one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub delete_cost: Option<i64>,

    /// Cost of replacing one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub replace_cost: Option<i64>,
}

impl CostArgs {
    /// Convert into a partial config layer for merging.
    pub fn as_overrides(&self) -> CostConfig {
        CostConfig {
            insert_cost: self.insert_cost,
            delete_cost: self.delete_cost,
            replace_cost: self.replace_cost,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the distance between two strings
    Distance {
        /// String to transform
        #[arg(allow_hyphen_values = true)]
        source: String,

        /// String to transform into
        #[arg(allow_hyphen_values = true)]
        target: String,

        #[command(flatten)]
        costs: CostArgs,

        /// Compare bytes instead of characters
        #[arg(short, long)]
        bytes: bool,

        /// Print the full cost table
        #[arg(short, long)]
        table: bool,
    },

    /// Compute distances for tab-separated pairs, one per line
    Batch {
        /// Input file (reads stdin if omitted)
        input: Option<PathBuf>,

        #[command(flatten)]
        costs: CostArgs,

        /// Process pairs on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show the effective cost model
    Config {
        #[command(flatten)]
        costs: CostArgs,

        /// Print the cost model as JSON
        #[arg(long)]
        json: bool,
    },
}
