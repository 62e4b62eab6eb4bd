//! Application shell: event loop, input buffer and timers.
//!
//! Single-threaded and event-driven. Key and mouse handling is scoped by
//! the session mode in one place, so boot-dismiss and crash-recovery
//! triggers exist exactly while their owning mode is active and cannot
//! accumulate across repeated crash episodes. The only timers are plain
//! deadlines checked on ticks against the injected [`TimeSource`]; nothing
//! can fire after the app is dropped.

use crate::config::Config;
use crate::nav::NavigationBridge;
use crate::services::{RandomSource, SharedTimeSource};
use crate::session::{Mode, Session};
use crate::ui;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::Backend;
use ratatui::layout::Position;
use ratatui::{Frame, Terminal};
use std::time::{Duration, Instant};

const TICK_INTERVAL: Duration = Duration::from_millis(33);

pub struct App {
    session: Session,
    bridge: Box<dyn NavigationBridge>,
    time: SharedTimeSource,
    input: String,
    boot_started: Instant,
    boot_deadline: Option<Instant>,
    crash_started: Option<Instant>,
    last_area: ratatui::layout::Rect,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        rng: Box<dyn RandomSource>,
        time: SharedTimeSource,
        bridge: Box<dyn NavigationBridge>,
        last_login: &str,
    ) -> Self {
        let now = time.now();
        let mut session = Session::new(config, rng, last_login);
        let boot_timeout = config.boot_timeout();
        // A zero timeout skips the boot sequence outright; no overlay frame
        // is ever drawn.
        let boot_deadline = if boot_timeout.is_zero() {
            session.dismiss_boot();
            None
        } else {
            Some(now + boot_timeout)
        };
        Self {
            session,
            bridge,
            time,
            input: String::new(),
            boot_started: now,
            boot_deadline,
            crash_started: None,
            last_area: ratatui::layout::Rect::default(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The input buffer as the prompt line should show it: masked while a
    /// password prompt is active.
    pub fn input_display(&self) -> String {
        match self.session.mode() {
            Mode::AwaitingPassword { .. } => "*".repeat(self.input.chars().count()),
            _ => self.input.clone(),
        }
    }

    pub fn boot_elapsed(&self) -> Duration {
        self.time.elapsed_since(self.boot_started)
    }

    pub fn crash_elapsed(&self) -> Duration {
        self.crash_started
            .map(|started| self.time.elapsed_since(started))
            .unwrap_or_default()
    }

    /// Blocking event loop for the real terminal.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if event::poll(TICK_INTERVAL)? {
                self.handle_event(event::read()?);
            }
            self.on_tick();
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.last_area = frame.area();
        ui::draw(frame, self);
    }

    /// Deadline check; fires the boot auto-dismiss when due.
    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.boot_deadline {
            if self.time.now() >= deadline {
                self.boot_deadline = None;
                self.session.dismiss_boot();
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            self.should_quit = true;
            return;
        }

        match self.session.mode() {
            // First interaction short-circuits the boot sequence; the key
            // is consumed, not forwarded to the shell.
            Mode::Booting => {
                self.boot_deadline = None;
                self.session.dismiss_boot();
            }
            // One-shot recovery trigger: any key rolls back.
            Mode::Crashed(_) => self.recover(),
            Mode::AwaitingPassword { .. } => match key.code {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                // History recall is disabled during a password prompt.
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            },
            Mode::Normal => match key.code {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input.pop();
                    let buffer = self.input.clone();
                    self.session.history.note_edit(&buffer);
                }
                KeyCode::Up => {
                    if let Some(recalled) = self.session.history.recall_up(&self.input) {
                        self.input = recalled.to_string();
                    }
                }
                KeyCode::Down => {
                    if let Some(restored) = self.session.history.recall_down() {
                        self.input = restored;
                    }
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    let buffer = self.input.clone();
                    self.session.history.note_edit(&buffer);
                }
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        match self.session.mode() {
            Mode::Booting => {
                self.boot_deadline = None;
                self.session.dismiss_boot();
            }
            Mode::Crashed(variant) => {
                let pos = Position::new(mouse.column, mouse.row);
                if ui::crash::background_click_recovers(variant, self.last_area, pos) {
                    self.recover();
                }
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        let was_crashed = matches!(self.session.mode(), Mode::Crashed(_));
        self.session.submit(&line, self.bridge.as_mut());
        if !was_crashed {
            if let Mode::Crashed(_) = self.session.mode() {
                self.crash_started = Some(self.time.now());
            }
        }
    }

    fn recover(&mut self) {
        self.crash_started = None;
        self.session.recover();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::RecordingBridge;
    use crate::services::{ScriptedRandom, TestTimeSource};
    use std::sync::Arc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app() -> (App, Arc<TestTimeSource>) {
        let time = TestTimeSource::shared();
        let app = App::new(
            &Config::default(),
            Box::new(ScriptedRandom::new([0])),
            time.clone(),
            Box::new(RecordingBridge::new()),
            "2026-01-01 00:00:00",
        );
        (app, time)
    }

    #[test]
    fn boot_dismisses_on_deadline_expiry() {
        let (mut app, time) = test_app();
        app.on_tick();
        assert_eq!(app.session().mode(), Mode::Booting);
        time.advance(Duration::from_millis(1801));
        app.on_tick();
        assert_eq!(app.session().mode(), Mode::Normal);
    }

    #[test]
    fn boot_dismisses_on_first_key_and_swallows_it() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Char('l')));
        assert_eq!(app.session().mode(), Mode::Normal);
        // The dismissing key must not have reached the input buffer.
        assert_eq!(app.input_display(), "");
    }

    #[test]
    fn expired_deadline_cannot_refire_after_dismissal() {
        let (mut app, time) = test_app();
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.session().mode(), Mode::Normal);
        time.advance(Duration::from_secs(10));
        // A later tick must not disturb the session.
        app.on_tick();
        assert_eq!(app.session().mode(), Mode::Normal);
    }

    #[test]
    fn typing_and_submitting_runs_a_command() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Enter)); // dismiss boot
        for c in "pwd".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        let texts: Vec<_> = app
            .session()
            .transcript
            .lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert!(texts.contains(&"/"));
    }

    #[test]
    fn password_input_is_masked() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Enter));
        for c in "sudo rm -rf /".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(
            app.session().mode(),
            Mode::AwaitingPassword { .. }
        ));
        for c in "secret".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input_display(), "******");
    }

    #[test]
    fn zero_boot_timeout_starts_directly_in_normal_mode() {
        let time = TestTimeSource::shared();
        let config = Config {
            boot_timeout_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(
            &config,
            Box::new(ScriptedRandom::new([0])),
            time,
            Box::new(RecordingBridge::new()),
            "2026-01-01 00:00:00",
        );
        assert_eq!(app.session().mode(), Mode::Normal);
        // The first key is a command keystroke, not a boot dismissal.
        app.handle_event(key(KeyCode::Char('p')));
        assert_eq!(app.input_display(), "p");
    }

    #[test]
    fn history_recall_is_disabled_during_a_password_prompt() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Enter));
        for c in "sudo rm -rf /".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(
            app.session().mode(),
            Mode::AwaitingPassword { .. }
        ));

        // ArrowUp must not recall anything; the seeded bait stays put.
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.input_display(), "");
        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.input_display(), "");
        assert_eq!(app.session().history.cursor(), None);
    }

    #[test]
    fn history_recall_fills_the_input_buffer() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Up));
        // Seeded bait entry.
        assert_eq!(app.input_display(), "sudo rm -rf /");
        app.handle_event(key(KeyCode::Down));
        assert_eq!(app.input_display(), "");
    }

    #[test]
    fn any_key_recovers_from_a_crash() {
        let (mut app, _time) = test_app();
        app.handle_event(key(KeyCode::Enter));
        for c in "sudo rm -rf /".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        for c in "thankyouforplaying".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Enter));
        assert!(matches!(app.session().mode(), Mode::Crashed(_)));

        app.handle_event(key(KeyCode::Char('x')));
        assert_eq!(app.session().mode(), Mode::Normal);
        assert_eq!(app.session().transcript.len(), 2);
    }

    #[test]
    fn ctrl_c_quits() {
        let (mut app, _time) = test_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }
}
