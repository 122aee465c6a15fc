use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logdigest")]
#[command(version)]
#[command(about = "Digest Notion daily and weekly logs into JSON reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch recent logs and write daily, weekly and combined reports
    Collect {
        /// Keep daily logs dated within this many days
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Keep weekly logs created within this many weeks
        #[arg(long, default_value_t = 4)]
        weeks: u32,

        /// Overrides OUTPUT_DIR
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List previously written reports, newest first
    List {
        /// Overrides OUTPUT_DIR
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
