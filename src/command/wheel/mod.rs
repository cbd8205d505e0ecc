//! Interactive wheel of names in the terminal.

mod app;
mod canvas;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::Config;
use app::App;

pub fn run(config: &Config, seed_names: &[String]) -> Result<()> {
    let mut app = App::new(config, seed_names);
    info!(names = app.names.len(), "wheel:start");

    let mut terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .context("Failed to enable mouse capture")
        .and_then(|_| event_loop(&mut terminal, &mut app, config.spin.frame_interval()));

    // Always hand the terminal back, even if the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    info!(winner = ?app.winner(), "wheel:exit");
    result
}

/// Redraw, handle input, and step the spin once per frame interval.
fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, frame: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw frame")?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= frame {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}
