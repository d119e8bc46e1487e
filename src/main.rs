mod cli;
mod convert;
mod document;
mod error;
mod readers;
mod shaper;
#[cfg(test)]
mod test_utils;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use log::error;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();
    if let Err(err) = cli::run(cli) {
        error!(target: "main", "{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
