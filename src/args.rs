use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cricket-scorer", about = "Ball-by-ball limited-overs cricket scorer")]
pub struct Args {
    /// Database file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Default overs limit offered on the new-match form
    #[arg(long, default_value_t = 10)]
    pub overs: u32,

    /// Where the share scorecard is written (defaults to the data directory)
    #[arg(long, value_name = "PATH")]
    pub export_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List saved matches, most recently updated first
    List,
    /// Print the share scorecard of a saved match
    Show {
        /// Match id as printed by `list`
        id: String,
    },
    /// Delete every saved match
    Reset,
}
