//! Shared test harness: drives the full app against a `TestBackend`
//! terminal with synthetic key and mouse events and controllable time.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use guest_shell::app::App;
use guest_shell::config::Config;
use guest_shell::nav::NavigationBridge;
use guest_shell::services::{ScriptedRandom, TestTimeSource};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Bridge whose recorded routes stay observable after the app takes
/// ownership of it.
#[derive(Debug, Clone, Default)]
pub struct SharedBridge {
    opened: Arc<Mutex<Vec<String>>>,
}

impl SharedBridge {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl NavigationBridge for SharedBridge {
    fn open(&mut self, route: &str) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push(route.to_string());
        Ok(())
    }
}

pub struct ShellTestHarness {
    pub app: App,
    pub time: Arc<TestTimeSource>,
    pub bridge: SharedBridge,
    terminal: Terminal<TestBackend>,
}

impl ShellTestHarness {
    /// Harness with scripted crash-variant draws (0 = Kernel, 1 = Humor,
    /// 2 = Minimal).
    pub fn with_rng(width: u16, height: u16, indices: impl IntoIterator<Item = usize>) -> Self {
        let time = TestTimeSource::shared();
        let bridge = SharedBridge::default();
        let app = App::new(
            &Config::default(),
            Box::new(ScriptedRandom::new(indices)),
            time.clone(),
            Box::new(bridge.clone()),
            "2026-08-23 12:00:00",
        );
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self {
            app,
            time,
            bridge,
            terminal,
        }
    }

    pub fn new(width: u16, height: u16) -> Self {
        Self::with_rng(width, height, [0])
    }

    pub fn render(&mut self) {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame)).unwrap();
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)));
        self.render();
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.app.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
        self.render();
    }

    /// Type a line and press Enter.
    pub fn submit(&mut self, line: &str) {
        self.type_text(line);
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
        self.render();
    }

    /// Advance logical time and run one tick.
    pub fn advance(&mut self, duration: Duration) {
        self.time.advance(duration);
        self.app.on_tick();
        self.render();
    }

    /// Dismiss the boot overlay with a keypress.
    pub fn dismiss_boot(&mut self) {
        self.send_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let pos = buffer.index_of(x, y);
                screen.push_str(buffer.content[pos].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "expected screen to contain {needle:?}\n--- screen ---\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(needle),
            "expected screen to not contain {needle:?}\n--- screen ---\n{screen}"
        );
    }
}
