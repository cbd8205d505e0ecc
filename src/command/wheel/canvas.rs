//! Paints a wheel [`Scene`] onto a ratatui canvas.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Context, Painter, Shape};

use crate::wheel::geometry::{
    Align, CanvasSize, HUB_RADIUS, LABEL_INSET, Label, Point, Scene, WheelScene,
};
use crate::wheel::palette::Rgb;

/// Filled circular sector. Angles follow the scene's clockwise convention.
struct Sector {
    canvas: CanvasSize,
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    color: Color,
    /// Sampling distance in canvas units, about half a terminal dot.
    step: f64,
}

impl Shape for Sector {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let mut r = 0.0;
        while r <= self.radius {
            let arc = (self.sweep_deg.to_radians() * r).max(self.step);
            let samples = (arc / self.step).ceil() as usize;
            for k in 0..=samples {
                let angle = self.start_deg + self.sweep_deg * k as f64 / samples as f64;
                let p = self.center.polar(r, angle);
                // scene y grows downward, canvas y grows upward
                if let Some((x, y)) = painter.get_point(p.x, self.canvas.height - p.y) {
                    painter.paint(x, y, self.color);
                }
            }
            r += self.step;
        }
    }
}

/// Widget drawing one frame of the wheel.
pub struct WheelCanvas<'a> {
    scene: &'a Scene,
    size: CanvasSize,
}

impl<'a> WheelCanvas<'a> {
    pub fn new(scene: &'a Scene, size: CanvasSize) -> Self {
        Self { scene, size }
    }
}

impl Widget for WheelCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nothing to draw on yet
        if area.width == 0 || area.height == 0 {
            return;
        }

        let size = self.size;
        // Width of one terminal cell in canvas units
        let cell_width = size.width / f64::from(area.width);
        let step = cell_width.min(size.height / (f64::from(area.height) * 2.0)) / 2.0;

        Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| match self.scene {
                Scene::Empty { label } => print_label(ctx, label, size, cell_width, None),
                Scene::Wheel(wheel) => paint_wheel(ctx, wheel, size, cell_width, step),
            })
            .render(area, buf);
    }
}

fn paint_wheel(
    ctx: &mut Context<'_>,
    wheel: &WheelScene,
    size: CanvasSize,
    cell_width: f64,
    step: f64,
) {
    for slice in &wheel.slices {
        ctx.draw(&Sector {
            canvas: size,
            center: wheel.center,
            radius: wheel.radius,
            start_deg: slice.start_deg,
            sweep_deg: slice.sweep_deg,
            color: slice.color.into(),
            step,
        });
    }
    ctx.layer();

    ctx.draw(&Sector {
        canvas: size,
        center: wheel.hub.center,
        radius: wheel.hub.radius,
        start_deg: 0.0,
        sweep_deg: 360.0,
        color: wheel.hub.color.into(),
        step,
    });

    let max_label = (wheel.radius - LABEL_INSET - HUB_RADIUS) / cell_width;
    for slice in &wheel.slices {
        print_label(
            ctx,
            &slice.label,
            size,
            cell_width,
            Some((max_label.floor() as usize, slice.color)),
        );
    }
    print_label(
        ctx,
        &wheel.hub_label,
        size,
        cell_width,
        Some((usize::MAX, wheel.hub.color)),
    );

    let tip = wheel.pointer.tip;
    ctx.print(
        tip.x + cell_width / 2.0,
        size.height - tip.y,
        Line::styled(
            "◀",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    );
}

/// Print a label horizontally.
///
/// Terminal text cannot rotate, so right-aligned labels keep their outer end
/// on the anchor: on the right half of the wheel the text ends there, on the
/// left half it starts there.
fn print_label(
    ctx: &mut Context<'_>,
    label: &Label,
    size: CanvasSize,
    cell_width: f64,
    fit: Option<(usize, Rgb)>,
) {
    let text = match fit {
        Some((max_chars, _)) => truncate(&label.text, max_chars),
        None => label.text.clone(),
    };
    if text.is_empty() {
        return;
    }

    let mut style = Style::default().fg(label.color.into());
    if let Some((_, background)) = fit {
        style = style.bg(background.into());
    }
    let line = Line::styled(text, style);
    let width = line.width() as f64 * cell_width;

    let x = match label.align {
        Align::Center => label.anchor.x - width / 2.0,
        Align::Right if label.angle_deg.to_radians().cos() >= 0.0 => label.anchor.x - width,
        Align::Right => label.anchor.x,
    };
    ctx.print(x, size.height - label.anchor.y, line);
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    match max_chars {
        0 => String::new(),
        1 => "…".to_string(),
        n => {
            let mut short: String = text.chars().take(n - 1).collect();
            short.push('…');
            short
        }
    }
}
