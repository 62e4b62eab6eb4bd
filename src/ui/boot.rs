//! Boot-sequence overlay.
//!
//! Covers the whole screen while the session is `Booting`. Lines appear on
//! a staggered schedule driven by elapsed time; any key or click dismisses
//! the overlay early.

use crate::app::App;
use crate::session::BOOT_LINES;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FIRST_LINE_AT_MS: u128 = 150;
const LINE_STAGGER_MS: u128 = 180;

/// Centered box for the boot log.
fn panel_area(area: Rect) -> Rect {
    let width = area.width.min(60);
    let height = (BOOT_LINES.len() as u16 + 5).min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );

    let elapsed = app.boot_elapsed().as_millis();
    let mut lines: Vec<Line> = vec![Line::styled(
        "TERMINAL BOOT SEQUENCE",
        Style::default().fg(Color::Green),
    )];
    for (index, text) in BOOT_LINES.iter().enumerate() {
        if elapsed >= FIRST_LINE_AT_MS + index as u128 * LINE_STAGGER_MS {
            lines.push(Line::styled(
                format!("> {text}"),
                Style::default().fg(Color::Green),
            ));
        }
    }
    lines.push(Line::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    ));

    let panel = panel_area(area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        panel,
    );
}
