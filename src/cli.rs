use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

use crate::command::{self, spin::SpinOptions};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "wheelpick", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/wheelpick/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive wheel (default)
    Ui {
        /// Names to put on the wheel at startup
        names: Vec<String>,
    },
    /// Spin once without the interactive UI and print the winner
    Spin {
        /// Names to spin, added after any configured names
        names: Vec<String>,
        /// Seed the random offset for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the animation
        #[arg(long)]
        instant: bool,
        /// Print the result as JSON (implies --instant)
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Ui { names: Vec::new() }) {
        Command::Completions { shell } => {
            generate(shell, &mut Cli::command(), "wheelpick", &mut io::stdout());
            Ok(())
        }
        Command::Ui { names } => {
            let config = Config::load(cli.config.as_deref())?;
            command::wheel::run(&config, &names)
        }
        Command::Spin {
            names,
            seed,
            instant,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            command::spin::run(
                &config,
                SpinOptions {
                    names,
                    seed,
                    instant: instant || json,
                    json,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_ui() {
        let cli = Cli::try_parse_from(["wheelpick"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_spin() {
        let cli = Cli::try_parse_from([
            "wheelpick", "--config", "w.yaml", "spin", "Alice", "Bob", "--seed", "3", "--json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("w.yaml")));
        match cli.command {
            Some(Command::Spin {
                names,
                seed,
                instant,
                json,
            }) => {
                assert_eq!(names, vec!["Alice", "Bob"]);
                assert_eq!(seed, Some(3));
                assert!(!instant);
                assert!(json);
            }
            _ => panic!("expected spin"),
        }
    }
}
