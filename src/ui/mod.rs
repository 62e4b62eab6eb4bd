//! UI rendering modules.
//!
//! All presentation logic, separated into focused submodules:
//! - `terminal_view` - transcript pane and prompt/input line
//! - `boot` - boot-sequence overlay
//! - `crash` - the three crash overlays and their hit-testing

pub mod boot;
pub mod crash;
pub mod terminal_view;

use crate::app::App;
use crate::session::Mode;
use ratatui::Frame;

/// Render one frame: the terminal view plus whichever overlay the current
/// mode calls for.
pub fn draw(frame: &mut Frame, app: &App) {
    terminal_view::render(frame, app);
    match app.session().mode() {
        Mode::Booting => boot::render(frame, app),
        Mode::Crashed(variant) => crash::render(frame, app, variant),
        Mode::Normal | Mode::AwaitingPassword { .. } => {}
    }
}
