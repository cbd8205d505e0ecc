//! Backend-independent wheel geometry.
//!
//! [`render`] turns a name list into a [`Scene`]: every angle, color and label
//! anchor needed to draw one frame. Coordinates are logical canvas units with
//! the origin at the top-left and the y axis pointing down, so angles grow
//! clockwise on screen.

use super::palette::{self, BLACK, Rgb, WHITE};

/// Label shown instead of the wheel when there are no names.
pub const EMPTY_LABEL: &str = "Add names to spin the wheel";
/// Static label drawn on the hub.
pub const HUB_LABEL: &str = "Click to spin";

/// Gap between the wheel rim and the canvas edge.
pub const RIM_MARGIN: f64 = 10.0;
/// Distance from the rim to the outer end of each slice label.
pub const LABEL_INSET: f64 = 10.0;
pub const HUB_RADIUS: f64 = 20.0;
/// Fixed reference angle of the pointer. The winner is the slice under it.
pub const POINTER_ANGLE: f64 = 0.0;

/// Size of the drawing surface in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

pub const CANVAS_SIZE: CanvasSize = CanvasSize {
    width: 300.0,
    height: 300.0,
};

impl CanvasSize {
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Wheel radius: half the smaller dimension minus the rim margin.
    pub fn wheel_radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - RIM_MARGIN).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The point `distance` units from `self` in direction `angle_deg`.
    pub fn polar(&self, distance: f64, angle_deg: f64) -> Point {
        let radians = angle_deg.to_radians();
        Point {
            x: distance.mul_add(radians.cos(), self.x),
            y: distance.mul_add(radians.sin(), self.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    /// The text ends at the anchor.
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    /// Rotation of the text baseline.
    pub angle_deg: f64,
    pub align: Align,
    pub color: Rgb,
}

/// One sector of the wheel, already rotated.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Position of the name in the list.
    pub index: usize,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: Rgb,
    pub label: Label,
}

impl Slice {
    /// Whether the ray at `angle_deg` falls inside this slice.
    /// The start edge is inclusive and the end edge exclusive.
    pub fn contains(&self, angle_deg: f64) -> bool {
        normalize_deg(angle_deg - self.start_deg) < self.sweep_deg
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
}

/// Fixed marker on the rim that decides the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    pub angle_deg: f64,
    /// Where the pointer touches the rim.
    pub tip: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelScene {
    pub center: Point,
    pub radius: f64,
    pub slices: Vec<Slice>,
    pub hub: Hub,
    pub hub_label: Label,
    pub pointer: Pointer,
}

impl WheelScene {
    /// Index of the slice currently under the pointer.
    pub fn slice_under_pointer(&self) -> Option<usize> {
        self.slices
            .iter()
            .find(|slice| slice.contains(self.pointer.angle_deg))
            .map(|slice| slice.index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// No names: only the instructional label.
    Empty { label: Label },
    Wheel(WheelScene),
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_deg(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Describe one frame of the wheel for `names`, rotated by `rotation_deg`.
///
/// Rotation turns the wheel counter-clockwise on screen, so after rotating by
/// θ the slice under the pointer is the one whose unrotated span contains
/// `θ mod 360`. This matches [`super::spin::winner_index`].
pub fn render(names: &[String], size: CanvasSize, rotation_deg: f64) -> Scene {
    let center = size.center();

    if names.is_empty() {
        return Scene::Empty {
            label: Label {
                text: EMPTY_LABEL.to_string(),
                anchor: center,
                angle_deg: 0.0,
                align: Align::Center,
                color: BLACK,
            },
        };
    }

    let radius = size.wheel_radius();
    let sweep = 360.0 / names.len() as f64;

    let slices = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let start_deg = index as f64 * sweep - rotation_deg;
            let bisector = start_deg + sweep / 2.0;
            Slice {
                index,
                start_deg,
                sweep_deg: sweep,
                color: palette::color_for(index),
                label: Label {
                    text: name.clone(),
                    anchor: center.polar(radius - LABEL_INSET, bisector),
                    angle_deg: bisector,
                    align: Align::Right,
                    color: WHITE,
                },
            }
        })
        .collect();

    Scene::Wheel(WheelScene {
        center,
        radius,
        slices,
        hub: Hub {
            center,
            radius: HUB_RADIUS,
            color: WHITE,
        },
        hub_label: Label {
            text: HUB_LABEL.to_string(),
            anchor: center,
            angle_deg: 0.0,
            align: Align::Center,
            color: BLACK,
        },
        pointer: Pointer {
            angle_deg: POINTER_ANGLE,
            tip: center.polar(radius, POINTER_ANGLE),
        },
    })
}
