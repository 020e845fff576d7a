use crate::store::csv_file::DEFAULT_STORE_PATH;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Simple Phone Book")]
pub struct Cli {
    /// CSV file holding the phone book, created on first use
    #[arg(short, long, env = "PHONEBOOK_FILE", default_value = DEFAULT_STORE_PATH)]
    pub file: PathBuf,

    /// Print debug logs to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Level forced by flags. `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::Debug)
        } else if self.quiet {
            Some(LevelFilter::Error)
        } else {
            None
        }
    }
}
