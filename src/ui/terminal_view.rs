//! Transcript pane and prompt line.

use crate::app::App;
use crate::session::Mode;
use crate::transcript::Tone;
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Normal => Style::default().fg(Color::Green),
        Tone::Warn => Style::default().fg(Color::Yellow),
        Tone::Error => Style::default().fg(Color::Red),
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    render_transcript(frame, app, transcript_area);
    render_input(frame, app, input_area);
}

fn render_transcript(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" TERMINAL MODE ")
        .title_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);

    let lines = app.session().transcript.lines();
    // Tail-follow: show the newest lines that fit.
    let visible = inner.height as usize;
    let start = lines.len().saturating_sub(visible);
    let text: Vec<Line> = lines[start..]
        .iter()
        .map(|line| Line::styled(line.text.clone(), tone_style(line.tone)))
        .collect();

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(text), inner);
}

fn render_input(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let prompt = app.session().prompt();
    let shown = app.input_display();
    let masked = matches!(app.session().mode(), Mode::AwaitingPassword { .. });
    let input_style = if masked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };
    let line = Line::from(vec![
        Span::styled(prompt.clone(), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(shown.clone(), input_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let cursor_x = area.x + (prompt.chars().count() + 1 + shown.chars().count()) as u16;
    frame.set_cursor_position(Position::new(cursor_x.min(area.right()), area.y));
}
