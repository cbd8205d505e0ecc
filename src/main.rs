mod cli;
mod command;
mod config;
mod logger;
mod wheel;

use anyhow::Result;

fn main() -> Result<()> {
    let _log_guard = logger::init();
    cli::run()
}
