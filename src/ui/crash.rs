//! The three crash overlays.
//!
//! `Kernel` is a full-screen panic log, `Humor` a centered modal, `Minimal`
//! a falling-glyph rain with a short message in the middle. Clicking the
//! overlay background recovers; the humor modal and the minimal center
//! block are interactive surfaces and swallow clicks, matching the
//! one-shot-recovery contract.

use crate::app::App;
use crate::crash::CrashVariant;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Whether a click at `pos` lands on overlay background (and so recovers),
/// as opposed to an interactive surface inside the overlay.
pub fn background_click_recovers(variant: CrashVariant, area: Rect, pos: Position) -> bool {
    match variant {
        CrashVariant::Kernel => true,
        CrashVariant::Humor => !humor_modal_area(area).contains(pos),
        CrashVariant::Minimal => !minimal_center_area(area).contains(pos),
    }
}

pub fn render(frame: &mut Frame, app: &App, variant: CrashVariant) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );
    match variant {
        CrashVariant::Kernel => render_kernel(frame, area),
        CrashVariant::Humor => render_humor(frame, area),
        CrashVariant::Minimal => render_minimal(frame, app, area),
    }
}

fn render_kernel(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = CrashVariant::Kernel
        .overlay_lines()
        .iter()
        .map(|text| Line::styled(*text, Style::default().fg(Color::Gray)))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        CrashVariant::Kernel.recovery_hint(),
        Style::default().fg(Color::Green),
    ));
    let body = Rect::new(
        area.x + 2,
        area.y + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(4),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

fn humor_modal_area(area: Rect) -> Rect {
    let width = area.width.min(66);
    let height = 12.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_humor(frame: &mut Frame, area: Rect) {
    let modal = humor_modal_area(area);
    let copy = CrashVariant::Humor.overlay_lines();
    let mut lines: Vec<Line> = vec![Line::styled(
        copy[0],
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )];
    for text in &copy[1..] {
        lines.push(Line::raw(""));
        lines.push(Line::styled(*text, Style::default().fg(Color::LightRed)));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        CrashVariant::Humor.recovery_hint(),
        Style::default().fg(Color::LightRed),
    ));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        modal,
    );
}

fn minimal_center_area(area: Rect) -> Rect {
    let width = area.width.min(48);
    let height = 5.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_minimal(frame: &mut Frame, app: &App, area: Rect) {
    render_rain(frame, app, area);

    let center = minimal_center_area(area);
    let copy = CrashVariant::Minimal.overlay_lines();
    let lines = vec![
        Line::styled(copy[0], Style::default().fg(Color::Gray)).centered(),
        Line::styled(copy[1], Style::default().fg(Color::Gray)).centered(),
        Line::raw(""),
        Line::styled(
            CrashVariant::Minimal.recovery_hint(),
            Style::default().fg(Color::Green),
        )
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), center);
}

// Each glyph falls on its own schedule; position is pure arithmetic over
// elapsed time since the crash, so redrawing on ticks animates it.
fn render_rain(frame: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let elapsed_ms = app.crash_elapsed().as_millis() as u32;
    let buffer = frame.buffer_mut();
    let style = Style::default().fg(Color::Green);
    for glyph in app.session().rain() {
        if elapsed_ms < glyph.delay_ms {
            continue;
        }
        let progress =
            ((elapsed_ms - glyph.delay_ms) % glyph.duration_ms) as f32 / glyph.duration_ms as f32;
        let x = area.x + ((glyph.column / 100.0) * (area.width - 1) as f32) as u16;
        let y = area.y + (progress * (area.height - 1) as f32) as u16;
        buffer.set_string(x, y, glyph.glyph.to_string(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn kernel_overlay_is_all_background() {
        assert!(background_click_recovers(
            CrashVariant::Kernel,
            SCREEN,
            Position::new(40, 12)
        ));
    }

    #[test]
    fn humor_modal_swallows_clicks_inside_it() {
        let modal = humor_modal_area(SCREEN);
        let inside = Position::new(modal.x + 1, modal.y + 1);
        let outside = Position::new(0, 0);
        assert!(!background_click_recovers(CrashVariant::Humor, SCREEN, inside));
        assert!(background_click_recovers(CrashVariant::Humor, SCREEN, outside));
    }

    #[test]
    fn minimal_center_block_swallows_clicks() {
        let center = minimal_center_area(SCREEN);
        let inside = Position::new(center.x + 1, center.y + 1);
        assert!(!background_click_recovers(
            CrashVariant::Minimal,
            SCREEN,
            inside
        ));
        assert!(background_click_recovers(
            CrashVariant::Minimal,
            SCREEN,
            Position::new(1, 1)
        ));
    }
}

