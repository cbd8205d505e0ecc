//! Headless spin: run the animator without the TUI and print the winner.

use anyhow::{Context, Result, bail};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::wheel::spin::{SpinState, winner_index};
use crate::wheel::{Landing, NameList, Spinner, Step};

pub struct SpinOptions {
    pub names: Vec<String>,
    pub seed: Option<u64>,
    pub instant: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SpinReport<'a> {
    winner: &'a str,
    index: usize,
    final_angle: f64,
    total_angle: f64,
    names: &'a [String],
}

pub fn run(config: &Config, options: SpinOptions) -> Result<()> {
    let mut names = NameList::new();
    names.extend(&config.names);
    names.extend(&options.names);

    let landing = spin(&names, config, &options)?;

    if options.json {
        let report = SpinReport {
            winner: &landing.winner,
            index: landing.index,
            final_angle: landing.final_angle,
            total_angle: landing.total_angle,
            names: names.as_slice(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            style("Winner:").bold(),
            style(&landing.winner).green().bold()
        );
    }
    Ok(())
}

fn spin(names: &NameList, config: &Config, options: &SpinOptions) -> Result<Landing> {
    if names.is_empty() {
        bail!("No names to spin: pass names as arguments or set `names` in the config file");
    }

    let mut spinner = Spinner::new(config.spin.params());
    let started = match options.seed {
        Some(seed) => spinner.request(names, &mut StdRng::seed_from_u64(seed)),
        None => spinner.request(names, &mut rand::rng()),
    };
    if !started {
        bail!("Spin did not start");
    }

    let landing = if options.instant {
        spinner.run_to_completion()
    } else {
        animate(&mut spinner, names, config.spin.frame_interval())?
    };
    landing.context("Spin ended without a winner")
}

/// Step once per frame, showing the name under the pointer as the wheel turns.
fn animate(spinner: &mut Spinner, names: &NameList, frame: Duration) -> Result<Option<Landing>> {
    let total = match spinner.state() {
        SpinState::Spinning(spin) => spin.total_angle(),
        SpinState::Idle => return Ok(None),
    };

    let start = spinner.rotation();
    let bar = ProgressBar::new(total.ceil() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {msg}")?
            .progress_chars("=>-"),
    );

    let landing = loop {
        match spinner.step() {
            Step::Idle => break None,
            Step::Turning { angle } => {
                bar.set_position((angle - start) as u64);
                if let Some(name) = names.get(winner_index(angle, names.len())) {
                    bar.set_message(name.to_string());
                }
                thread::sleep(frame);
            }
            Step::Landed(landing) => break Some(landing),
        }
    };

    bar.finish_and_clear();
    Ok(landing)
}
