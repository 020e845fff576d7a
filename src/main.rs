use clap::Parser;
use dotenv::dotenv;
use rusty_phonebook::prelude::{Cli, run_app};
use std::process::exit;

fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {e}");
        exit(1);
    }
}
