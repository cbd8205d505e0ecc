//! Fixed slice colors, assigned cyclically by list position.

use ratatui::style::Color;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub const PALETTE: [Rgb; 8] = [
    Rgb(0x42, 0x85, 0xF4), // blue
    Rgb(0x34, 0xA8, 0x53), // green
    Rgb(0xFB, 0xBC, 0x05), // yellow
    Rgb(0xEA, 0x43, 0x35), // red
    Rgb(0xFF, 0x6D, 0x01), // orange
    Rgb(0x46, 0xBD, 0xC6), // teal
    Rgb(0x7B, 0xAA, 0xF7), // light blue
    Rgb(0xF0, 0x7B, 0x72), // salmon
];

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

/// Color of the slice (and list entry) at `index`.
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
