use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "pass importance analyzer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Download open-data event files for every match in the match list
    Fetch {
        /// JSON file listing the matches to fetch
        #[arg(short, long, default_value = "matches.json")]
        matches_file: PathBuf,
        /// Directory to store event files in
        #[arg(short, long, default_value = "events")]
        events_dir: PathBuf,
    },
    /// Score every completed pass and write the results table
    Analyze {
        /// JSON file listing the matches to analyze
        #[arg(short, long, default_value = "matches.json")]
        matches_file: PathBuf,
        /// Directory holding the event files
        #[arg(short, long, default_value = "events")]
        events_dir: PathBuf,
        /// Destination CSV file
        #[arg(short, long, default_value = "pass_importance_output.csv")]
        output: PathBuf,
    },
}
