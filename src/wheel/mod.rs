//! Wheel domain: the name list, slice geometry and the spin animation.

pub mod geometry;
pub mod names;
pub mod palette;
pub mod spin;

pub use geometry::{CANVAS_SIZE, CanvasSize, Scene, render};
pub use names::{NameInput, NameList};
pub use spin::{Landing, SpinParams, Spinner, Step};
