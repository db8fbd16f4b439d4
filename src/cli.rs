use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sinu-checker")]
#[command(about = "SINU ingredient checker: is this product non-comedogenic and safe for acne?", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one photo and print the ingredient list
    Analyze {
        /// Photo of the ingredient label
        #[arg(required = true)]
        photo: PathBuf,

        /// Show the note of every ingredient
        #[arg(short = 'a', long)]
        expand_all: bool,

        /// Show the note of the given row (1-based, repeatable)
        #[arg(short, long = "expand", value_name = "ROW")]
        expand: Vec<usize>,

        /// Print the analysis result as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: upload, browse rows, upload another photo
    Check {
        /// Photo to analyze first (asked for when omitted)
        photo: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Set the analysis API origin
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set the request timeout in seconds (0 = no timeout)
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
