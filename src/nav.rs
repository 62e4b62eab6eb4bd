//! Navigation bridge: the shell's only outward-facing side effect.
//!
//! `open <target>` resolves against a fixed route table and hands the route
//! to a [`NavigationBridge`]. The production bridge joins the route onto the
//! configured site base URL and launches the platform opener; tests record
//! the requested routes instead.

use anyhow::Result;

/// Resolve an `open` target (already lowercased) to a fixed route.
pub fn route_for(target: &str) -> Option<&'static str> {
    let route = match target {
        "home" => "/",
        "about" => "/about",
        "projects" => "/projects",
        "writing" => "/writing",
        "resume" | "resume.pdf" => "/resume",
        "chat-websocket-demo" => "/projects#chat-websocket-demo",
        "todo-list-web-desktop-app" => "/projects#todo-list-web-desktop-app",
        "resume-analyzer" => "/projects#resume-analyzer",
        "latex-template-resume" => "/projects#latex-template-resume",
        _ => return None,
    };
    Some(route)
}

/// Executes a route change on behalf of the shell.
pub trait NavigationBridge {
    fn open(&mut self, route: &str) -> Result<()>;
}

/// Production bridge: opens `<base_url><route>` in the system browser.
#[derive(Debug)]
pub struct SystemBrowser {
    base_url: String,
}

impl SystemBrowser {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl NavigationBridge for SystemBrowser {
    fn open(&mut self, route: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, route);
        tracing::info!(url = %url, "opening route in system browser");
        open::that(&url)?;
        Ok(())
    }
}

/// Test bridge that records every requested route.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    pub opened: Vec<String>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NavigationBridge for RecordingBridge {
    fn open(&mut self, route: &str) -> Result<()> {
        self.opened.push(route.to_string());
        Ok(())
    }
}
