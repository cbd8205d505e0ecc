//! Layout and drawing for the interactive wheel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use super::app::{App, Focus, HitAreas};
use super::canvas::WheelCanvas;
use crate::wheel::{CANVAS_SIZE, Scene};
use crate::wheel::palette;

const SPIN_LABEL: &str = "Spin the Wheel";
const SPINNING_LABEL: &str = "Spinning...";
const HELP: &str = "Enter add · Tab focus · Ctrl+S spin · Del remove · Esc quit";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(" Wheel of Names ").centered());
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(inner);
    let [wheel_area, winner_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(left);
    let [input_area, list_area, button_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(right);

    let wheel_area = square_cells(wheel_area);
    let scene = app.scene(CANVAS_SIZE);
    frame.render_widget(WheelCanvas::new(&scene, CANVAS_SIZE), wheel_area);
    draw_winner(frame, app, &scene, winner_area);
    draw_input(frame, app, input_area);
    draw_names(frame, app, list_area);
    draw_spin_button(frame, app, button_area);
    frame.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help_area,
    );

    app.areas = HitAreas {
        wheel: wheel_area,
        spin_button: button_area,
        input: input_area,
        list: list_area,
    };
}

/// Largest centered rect that looks square, given cells twice as tall as wide.
fn square_cells(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Winner line. While spinning the winner is cleared and the line shows a
/// dimmed readout of the name passing the pointer instead.
fn draw_winner(frame: &mut Frame, app: &App, scene: &Scene, area: Rect) {
    let passing = match scene {
        Scene::Wheel(wheel) if app.spinner.is_spinning() => wheel
            .slice_under_pointer()
            .and_then(|i| wheel.slices.get(i))
            .map(|slice| slice.label.text.as_str()),
        _ => None,
    };

    let line = match (app.winner(), passing) {
        (_, Some(name)) => Line::styled(
            format!("◀ {name}"),
            Style::default().fg(Color::DarkGray),
        ),
        (Some(winner), None) => Line::from(vec![
            Span::styled("Winner: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                winner.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        (None, None) => Line::default(),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(" Enter a name ");
    let text = if app.input.is_empty() && !focused {
        Line::styled("Type a name, then Enter", Style::default().fg(Color::DarkGray))
    } else {
        Line::raw(app.input.as_str())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let typed = Line::raw(app.input.as_str()).width() as u16;
        let x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn draw_names(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::List;
    let items: Vec<ListItem> = app
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let color: Color = palette::color_for(i).into();
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(name.to_string(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title(format!(" Names on the wheel ({}) ", app.names.len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(app.selected);
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_spin_button(frame: &mut Frame, app: &App, area: Rect) {
    let label = if app.spinner.is_spinning() {
        SPINNING_LABEL
    } else {
        SPIN_LABEL
    };
    // Inert while spinning or empty
    let style = if app.can_spin() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::SpinParams;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::with_rng(SpinParams::default(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_square_cells() {
        let area = square_cells(Rect::new(0, 0, 100, 20));
        assert_eq!(area, Rect::new(30, 0, 40, 20));
        let area = square_cells(Rect::new(2, 2, 20, 40));
        assert_eq!(area, Rect::new(2, 17, 20, 10));
    }

    #[test]
    fn test_empty_screen() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Wheel of Names"));
        assert!(text.contains("Add names to spin the wheel"));
        assert!(text.contains(SPIN_LABEL));
        assert!(text.contains("Names on the wheel (0)"));
        assert!(!text.contains("Winner:"));
    }

    #[test]
    fn test_draw_records_hit_areas() {
        let mut app = app();
        screen(&mut app);
        assert!(app.areas.wheel.width > 0);
        assert!(app.areas.spin_button.height == 3);
        assert!(!app.areas.wheel.intersects(app.areas.input));
    }

    #[test]
    fn test_spinning_and_winner_text() {
        let mut app = app();
        app.names.extend(["Alice", "Bob"]);
        app.spinner.start(&app.names, 20.0);
        let text = screen(&mut app);
        assert!(text.contains(SPINNING_LABEL));
        assert!(text.contains("Names on the wheel (2)"));
        assert!(text.contains("◀ Alice"));

        assert!(!text.contains("Winner:"));

        app.on_tick();
        app.on_tick();
        let text = screen(&mut app);
        assert!(text.contains("Winner: Alice"));
        assert!(!text.contains("◀ Alice"));
        assert!(text.contains(SPIN_LABEL));
    }

    #[test]
    fn test_previous_winner_hidden_during_next_spin() {
        let mut app = app();
        app.names.extend(["Alice", "Bob"]);
        app.spinner.start(&app.names, 20.0);
        app.spinner.run_to_completion();
        assert!(screen(&mut app).contains("Winner: Alice"));

        // Resumes from 20 degrees; 200 is in Bob's half
        app.spinner.start(&app.names, 180.0);
        app.on_tick();
        let text = screen(&mut app);
        assert!(!text.contains("Winner:"));
        assert!(text.contains("◀ Alice"));
        for _ in 0..17 {
            app.on_tick();
        }
        let text = screen(&mut app);
        assert!(text.contains("Winner: Bob"));
    }
}
