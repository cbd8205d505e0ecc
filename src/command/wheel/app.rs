//! Interactive wheel state and input handling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::config::Config;
use crate::wheel::spin::SpinState;
use crate::wheel::{CanvasSize, NameInput, NameList, Scene, SpinParams, Spinner, Step, render};

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Wheel,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Wheel,
            Focus::Wheel => Focus::List,
            Focus::List => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::Wheel => Focus::Input,
            Focus::List => Focus::Wheel,
        }
    }
}

/// Screen regions from the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub wheel: Rect,
    pub spin_button: Rect,
    pub input: Rect,
    pub list: Rect,
}

pub struct App {
    pub names: NameList,
    pub input: NameInput,
    pub spinner: Spinner,
    pub focus: Focus,
    /// Selected row in the names list
    pub selected: Option<usize>,
    pub areas: HitAreas,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config, seed_names: &[String]) -> Self {
        let mut app = Self::with_rng(config.spin.params(), StdRng::from_os_rng());
        app.names.extend(&config.names);
        app.names.extend(seed_names);
        app
    }

    pub fn with_rng(params: SpinParams, rng: StdRng) -> Self {
        Self {
            names: NameList::new(),
            input: NameInput::default(),
            spinner: Spinner::new(params),
            focus: Focus::default(),
            selected: None,
            areas: HitAreas::default(),
            should_quit: false,
            rng,
        }
    }

    /// Submit the input field as a new name.
    pub fn add_name(&mut self) -> bool {
        self.input.submit(&mut self.names)
    }

    /// Remove the selected name. Refused while a spin is running.
    pub fn remove_selected(&mut self) -> Option<String> {
        if self.spinner.is_spinning() {
            debug!("names:remove refused while spinning");
            return None;
        }
        let removed = self.names.remove(self.selected?)?;
        self.selected = match self.names.len() {
            0 => None,
            len => self.selected.map(|i| i.min(len - 1)),
        };
        Some(removed)
    }

    pub fn can_spin(&self) -> bool {
        !self.spinner.is_spinning() && !self.names.is_empty()
    }

    /// Single entry point for every spin trigger.
    pub fn request_spin(&mut self) -> bool {
        self.spinner.request(&self.names, &mut self.rng)
    }

    /// Advance the animation by one frame.
    pub fn on_tick(&mut self) {
        if let Step::Landed(landing) = self.spinner.step() {
            info!(winner = %landing.winner, "wheel:winner shown");
        }
    }

    /// Scene for the current frame.
    ///
    /// While spinning this draws the names the spin started with.
    pub fn scene(&self, size: CanvasSize) -> Scene {
        let names = match self.spinner.state() {
            SpinState::Spinning(spin) => spin.names(),
            SpinState::Idle => self.names.as_slice(),
        };
        render(names, size, self.spinner.rotation())
    }

    pub fn winner(&self) -> Option<&str> {
        self.spinner.winner()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => {
                self.request_spin();
            }
            KeyCode::Char('a') if ctrl => {
                self.add_name();
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Wheel => self.handle_wheel_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.add_name();
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c)
            }
            _ => {}
        }
    }

    fn handle_wheel_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.request_spin();
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.names.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                self.selected = Some(self.selected.map_or(len - 1, |i| i.saturating_sub(1)));
            }
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
            }
            KeyCode::Delete | KeyCode::Backspace => {
                self.remove_selected();
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.areas.wheel.contains(position) {
            self.focus = Focus::Wheel;
            self.request_spin();
        } else if self.areas.spin_button.contains(position) {
            self.request_spin();
        } else if self.areas.input.contains(position) {
            self.focus = Focus::Input;
        } else if self.areas.list.contains(position) {
            self.focus = Focus::List;
        }
    }
}
