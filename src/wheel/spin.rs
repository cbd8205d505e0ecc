//! Spin state machine: Idle → Spinning → Idle with a winner.

use rand::Rng;
use tracing::{debug, info};

use super::geometry::normalize_deg;
use super::names::NameList;

pub const DEFAULT_STEP_DEGREES: f64 = 10.0;
pub const DEFAULT_FULL_TURNS: u32 = 5;

/// Tunables for one spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinParams {
    /// Angle added on every frame.
    pub step_degrees: f64,
    /// Whole turns before the random offset.
    pub full_turns: u32,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_STEP_DEGREES,
            full_turns: DEFAULT_FULL_TURNS,
        }
    }
}

impl SpinParams {
    /// Total rotation for a uniform sample `unit` in `[0, 1)`.
    pub fn total_angle(&self, unit: f64) -> f64 {
        f64::from(self.full_turns) * 360.0 + unit * 360.0
    }
}

/// An in-flight spin.
///
/// Holds its own copy of the names so that edits made while it runs do not
/// change which slice it lands on. The wheel turns by `total_angle` starting
/// from wherever the previous spin left it.
#[derive(Debug, Clone, PartialEq)]
pub struct Spin {
    names: Vec<String>,
    start_angle: f64,
    travelled: f64,
    total_angle: f64,
}

impl Spin {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn total_angle(&self) -> f64 {
        self.total_angle
    }

    /// Absolute rotation of the wheel.
    pub fn current_angle(&self) -> f64 {
        self.start_angle + self.travelled
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning(Spin),
}

/// Where a finished spin came to rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub index: usize,
    pub winner: String,
    /// Absolute rotation the wheel stopped at.
    pub final_angle: f64,
    /// Rotation this spin was drawn to turn by.
    pub total_angle: f64,
}

/// Result of advancing the animation by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Nothing is spinning.
    Idle,
    /// Still turning; redraw at this angle.
    Turning { angle: f64 },
    /// This frame finished the spin.
    Landed(Landing),
}

/// Index of the slice under the pointer when the wheel rests at `angle_deg`.
///
/// `floor((angle mod 360) / (360 / count))`, clamped into `[0, count - 1]`.
pub fn winner_index(angle_deg: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let slice = 360.0 / count as f64;
    let index = (normalize_deg(angle_deg) / slice).floor() as usize;
    index.min(count - 1)
}

/// Drives spins and remembers the latest winner.
#[derive(Debug, Clone)]
pub struct Spinner {
    params: SpinParams,
    state: SpinState,
    winner: Option<String>,
    /// Angle the wheel was left at by the last spin.
    resting_angle: f64,
}

impl Spinner {
    pub fn new(params: SpinParams) -> Self {
        Self {
            params,
            state: SpinState::Idle,
            winner: None,
            resting_angle: 0.0,
        }
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Current rotation of the wheel.
    pub fn rotation(&self) -> f64 {
        match &self.state {
            SpinState::Spinning(spin) => spin.current_angle(),
            SpinState::Idle => self.resting_angle,
        }
    }

    /// Start a spin if there are names and none is running.
    ///
    /// Returns false (and changes nothing) otherwise.
    pub fn request<R: Rng + ?Sized>(&mut self, names: &NameList, rng: &mut R) -> bool {
        if !self.can_start(names) {
            return false;
        }
        let unit: f64 = rng.random();
        self.start(names, self.params.total_angle(unit))
    }

    /// Start a spin that stops once it has turned by `total_angle` from the
    /// current resting angle.
    pub fn start(&mut self, names: &NameList, total_angle: f64) -> bool {
        if !self.can_start(names) {
            debug!(
                spinning = self.is_spinning(),
                count = names.len(),
                "spin:request ignored"
            );
            return false;
        }
        self.winner = None;
        let start_angle = normalize_deg(self.resting_angle);
        self.state = SpinState::Spinning(Spin {
            names: names.as_slice().to_vec(),
            start_angle,
            travelled: 0.0,
            total_angle,
        });
        info!(count = names.len(), start_angle, total_angle, "spin:start");
        true
    }

    fn can_start(&self, names: &NameList) -> bool {
        !names.is_empty() && !self.is_spinning()
    }

    /// Advance one frame.
    pub fn step(&mut self) -> Step {
        let SpinState::Spinning(spin) = &mut self.state else {
            return Step::Idle;
        };

        spin.travelled += self.params.step_degrees;
        if spin.travelled < spin.total_angle {
            return Step::Turning {
                angle: spin.current_angle(),
            };
        }

        let final_angle = spin.current_angle();
        let index = winner_index(final_angle, spin.names.len());
        let landing = Landing {
            index,
            winner: spin.names[index].clone(),
            final_angle,
            total_angle: spin.total_angle,
        };
        self.resting_angle = landing.final_angle;
        self.winner = Some(landing.winner.clone());
        self.state = SpinState::Idle;
        info!(
            winner = %landing.winner,
            index,
            final_angle = landing.final_angle,
            "spin:landed"
        );
        Step::Landed(landing)
    }

    /// Step until the current spin lands. Returns None if nothing is spinning.
    pub fn run_to_completion(&mut self) -> Option<Landing> {
        loop {
            match self.step() {
                Step::Idle => return None,
                Step::Turning { .. } => continue,
                Step::Landed(landing) => return Some(landing),
            }
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(SpinParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(names: &[&str]) -> NameList {
        let mut list = NameList::new();
        list.extend(names);
        list
    }

    #[test]
    fn test_request_with_no_names_is_noop() {
        let mut spinner = Spinner::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!spinner.request(&NameList::new(), &mut rng));
        assert_eq!(spinner.state(), &SpinState::Idle);
        assert!(spinner.winner().is_none());
        assert_eq!(spinner.step(), Step::Idle);
    }

    #[test]
    fn test_request_while_spinning_is_noop() {
        let names = list(&["Alice", "Bob"]);
        let mut spinner = Spinner::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(spinner.request(&names, &mut rng));
        spinner.step();
        spinner.step();
        let before = spinner.state().clone();

        assert!(!spinner.request(&names, &mut rng));
        assert!(!spinner.start(&names, 10.0));
        assert_eq!(spinner.state(), &before);
    }

    #[test]
    fn test_total_angle_range() {
        let names = list(&["Alice"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut spinner = Spinner::default();
            assert!(spinner.request(&names, &mut rng));
            let SpinState::Spinning(spin) = spinner.state() else {
                panic!("expected spinning");
            };
            assert!(spin.total_angle() >= 1800.0);
            assert!(spin.total_angle() < 2160.0);
            assert_eq!(spin.current_angle(), 0.0);
        }
    }

    #[test]
    fn test_scenario_three_names_total_1845() {
        let names = list(&["Alice", "Bob", "Cara"]);
        let mut spinner = Spinner::default();
        assert!(spinner.start(&names, 1845.0));

        let mut frames = 0;
        let landing = loop {
            frames += 1;
            match spinner.step() {
                Step::Turning { angle } => assert!(angle < 1845.0),
                Step::Landed(landing) => break landing,
                Step::Idle => panic!("spin stopped without landing"),
            }
        };

        assert_eq!(frames, 185);
        assert_eq!(landing.final_angle, 1850.0);
        let expected = ((1845.0_f64 % 360.0) / 120.0).floor() as usize;
        assert_eq!(landing.index, expected);
        assert_eq!(landing.winner, names.as_slice()[expected]);
        assert_eq!(spinner.winner(), Some("Alice"));
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.rotation(), 1850.0);
    }

    #[test]
    fn test_new_spin_clears_winner() {
        let names = list(&["Alice", "Bob"]);
        let mut spinner = Spinner::default();
        spinner.start(&names, 20.0);
        spinner.run_to_completion();
        assert!(spinner.winner().is_some());

        assert!(spinner.start(&names, 20.0));
        assert!(spinner.winner().is_none());
        assert!(spinner.run_to_completion().is_some());
        assert!(spinner.winner().is_some());
    }

    #[test]
    fn test_next_spin_starts_from_resting_angle() {
        let names = list(&["Alice", "Bob", "Cara"]);
        let mut spinner = Spinner::default();
        spinner.start(&names, 1845.0);
        spinner.run_to_completion();
        assert_eq!(spinner.rotation(), 1850.0);

        // 1850 rests at 50 degrees; the wheel keeps turning from there
        assert!(spinner.start(&names, 100.0));
        assert_eq!(spinner.rotation(), 50.0);
        assert_eq!(spinner.step(), Step::Turning { angle: 60.0 });

        let landing = spinner.run_to_completion().unwrap();
        assert_eq!(landing.total_angle, 100.0);
        assert_eq!(landing.final_angle, 150.0);
        assert_eq!(landing.index, winner_index(150.0, 3));
        assert_eq!(landing.winner, "Bob");
        assert_eq!(spinner.rotation(), 150.0);
    }

    #[test]
    fn test_spin_uses_snapshot_of_names() {
        let mut names = list(&["Alice", "Bob"]);
        let mut spinner = Spinner::default();
        // 190 mod 360 lands in the second half: Bob
        spinner.start(&names, 190.0);
        names.add_name("Cara");
        names.add_name("Dana");
        let landing = spinner.run_to_completion().unwrap();
        assert_eq!(landing.index, 1);
        assert_eq!(landing.winner, "Bob");
    }

    #[test]
    fn test_winner_index_bounds() {
        for count in 1..=20 {
            for step in 0..=720 {
                let angle = step as f64 * 7.3;
                let index = winner_index(angle, count);
                assert!(index < count);
                assert_eq!(index, winner_index(angle, count));
            }
        }
        assert_eq!(winner_index(359.999_999_999_999_9, 3), 2);
        assert_eq!(winner_index(-10.0, 4), 3);
        assert_eq!(winner_index(100.0, 0), 0);
    }

    #[test]
    fn test_seeded_spins_are_reproducible() {
        let names = list(&["Alice", "Bob", "Cara", "Dana"]);
        let spin = |seed| {
            let mut spinner = Spinner::default();
            spinner.request(&names, &mut StdRng::seed_from_u64(seed));
            spinner.run_to_completion().unwrap()
        };
        assert_eq!(spin(99), spin(99));
    }

    #[test]
    fn test_custom_params() {
        let names = list(&["Alice", "Bob"]);
        let mut spinner = Spinner::new(SpinParams {
            step_degrees: 45.0,
            full_turns: 1,
        });
        let total = SpinParams {
            step_degrees: 45.0,
            full_turns: 1,
        }
        .total_angle(0.5);
        spinner.start(&names, total);
        let landing = spinner.run_to_completion().unwrap();
        assert_eq!(landing.total_angle, 540.0);
        assert_eq!(landing.final_angle, 540.0);
        assert_eq!(landing.winner, "Bob");
    }
}
