//! The session state machine: the one real state machine in this program.
//!
//! A session is always in exactly one of four modes: `Booting`, `Normal`,
//! `AwaitingPassword` (with its attempt counter folded into the variant, so
//! an attempt count cannot exist outside a password prompt) or
//! `Crashed(variant)`. All transitions happen synchronously inside
//! [`Session::submit`], [`Session::dismiss_boot`] and [`Session::recover`];
//! there is no other mutation path.
//!
//! The destructive-command ladder is graduated on purpose: `rm`, `rm -rf`
//! and `rm -rf /` are deflected with taunts, bare `sudo` gets guidance, and
//! only `sudo rm -rf /` followed by the correct password reaches the crash
//! sequence.

use crate::command::{self, Command};
use crate::config::Config;
use crate::crash::{self, CrashVariant, RainGlyph};
use crate::history::History;
use crate::nav::{self, NavigationBridge};
use crate::services::RandomSource;
use crate::transcript::{Tone, Transcript};
use crate::vfs::{self, Cwd};

const SUDO_PASSWORD: &str = "thankyouforplaying";
const MAX_SUDO_ATTEMPTS: u8 = 3;

const HELP_LINES: &[&str] = &[
    "help",
    "ls",
    "tree",
    "pwd",
    "cd projects",
    "cd ..",
    "cat about.txt",
    "cat contact.txt",
    "open home",
    "open <item>",
    "clear",
    "> rm: Remove files (Usage restricted to sudoers. Please don't try on /)",
];

/// Lines staged by the boot overlay.
pub const BOOT_LINES: &[&str] = &[
    "booting SichengOS ...",
    "loading shell modules ...",
    "mounting /projects and /writing ...",
    "starting interactive console ...",
];

/// The session's mode. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Booting,
    Normal,
    AwaitingPassword { attempts: u8 },
    Crashed(CrashVariant),
}

/// One interactive shell session. Owns all of its state exclusively.
pub struct Session {
    user: String,
    host: String,
    cwd: Cwd,
    mode: Mode,
    pub transcript: Transcript,
    pub history: History,
    rng: Box<dyn RandomSource>,
    rain: Vec<RainGlyph>,
}

impl Session {
    /// New session in `Booting` mode with the opening banner installed.
    ///
    /// `last_login` is preformatted by the caller so the core stays
    /// clock-free.
    pub fn new(config: &Config, rng: Box<dyn RandomSource>, last_login: &str) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_normal(format!("{} 1.0.0 - terminal mode", config.system_name));
        transcript.push_normal(format!("Last login: {last_login} on ttys001"));
        transcript.push_normal("Type `help` to list commands.");
        Self {
            user: config.user.clone(),
            host: config.host.clone(),
            cwd: Cwd::Root,
            mode: Mode::Booting,
            transcript,
            history: History::new(),
            rng,
            rain: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cwd(&self) -> Cwd {
        self.cwd
    }

    /// Rain field of the current minimal-variant crash, empty otherwise.
    pub fn rain(&self) -> &[RainGlyph] {
        &self.rain
    }

    /// The prompt shown ahead of the input line.
    pub fn prompt(&self) -> String {
        match self.mode {
            Mode::AwaitingPassword { .. } => format!("[sudo] password for {}:", self.user),
            _ => format!("{}@{}:{}$", self.user, self.host, self.cwd),
        }
    }

    /// Booting -> Normal. Idempotent; a no-op in any other mode.
    pub fn dismiss_boot(&mut self) {
        if self.mode == Mode::Booting {
            tracing::debug!("boot sequence dismissed");
            self.mode = Mode::Normal;
        }
    }

    /// Crashed(variant) -> Normal. Resets cwd, clears the rain field and
    /// installs exactly the variant's two recovery lines as the transcript.
    pub fn recover(&mut self) {
        let Mode::Crashed(variant) = self.mode else {
            return;
        };
        tracing::info!(?variant, "recovering from crash");
        self.mode = Mode::Normal;
        self.cwd = Cwd::Root;
        self.rain.clear();
        let lines = variant.recovery_lines();
        self.transcript.replace_with(&lines, Tone::Normal);
    }

    /// Process one submitted input line.
    ///
    /// Empty input is a total no-op in every mode. In `AwaitingPassword` the
    /// line is a password attempt and is never echoed or recorded; otherwise
    /// it is echoed, recorded to history and dispatched.
    pub fn submit(&mut self, raw: &str, bridge: &mut dyn NavigationBridge) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        match self.mode {
            // No commands are processed while booting or crashed; the app
            // layer routes those keys to dismissal/recovery instead.
            Mode::Booting | Mode::Crashed(_) => {}
            Mode::AwaitingPassword { attempts } => self.password_attempt(line, attempts),
            Mode::Normal => {
                self.transcript.push_normal(format!("{} {}", self.prompt(), line));
                self.history.record(line);
                if let Some(cmd) = command::parse(line) {
                    self.execute(cmd, bridge);
                }
            }
        }
    }

    fn password_attempt(&mut self, attempt: &str, attempts: u8) {
        if attempt == SUDO_PASSWORD {
            self.mode = Mode::Normal;
            self.transcript.push("Authentication successful.", Tone::Warn);
            self.transcript.push("Deleting / ...", Tone::Error);
            self.trigger_crash();
            return;
        }
        let attempts = attempts + 1;
        if attempts >= MAX_SUDO_ATTEMPTS {
            // Lockout: the escalation episode resets, the session survives.
            self.mode = Mode::Normal;
            self.transcript
                .push("sudo: 3 incorrect password attempts", Tone::Error);
            self.transcript.push(
                "Hint by Sicheng: How did I forget again... maybe I should put the password in a txt file.",
                Tone::Warn,
            );
        } else {
            self.mode = Mode::AwaitingPassword { attempts };
            self.transcript.push("Sorry, try again.", Tone::Error);
        }
    }

    fn trigger_crash(&mut self) {
        let variant = CrashVariant::pick(self.rng.as_mut());
        tracing::info!(?variant, "destructive command reached the crash sequence");
        if variant == CrashVariant::Minimal {
            self.rain = crash::rain_field(self.rng.as_mut());
        }
        self.mode = Mode::Crashed(variant);
    }

    fn execute(&mut self, cmd: Command, bridge: &mut dyn NavigationBridge) {
        match cmd {
            Command::Help => {
                for line in HELP_LINES {
                    self.transcript.push_normal(*line);
                }
            }
            Command::Pwd => self.transcript.push_normal(self.cwd.as_path()),
            Command::Ls => self.transcript.push_normal(vfs::list(self.cwd).join("  ")),
            Command::Tree => {
                for line in vfs::tree(self.cwd) {
                    self.transcript.push_normal(*line);
                }
            }
            Command::CdProjects => self.cwd = Cwd::Projects,
            Command::CdUp => self.cwd = Cwd::Root,
            // The echo pushed above goes with everything else; a cleared
            // transcript is exactly empty.
            Command::Clear => self.transcript.clear(),
            Command::Cat(name) => match vfs::read(self.cwd, &name) {
                Some(content) => self.transcript.push_normal(content),
                None => self.transcript.push(
                    format!("cat: {}: No such file in {}", name, self.cwd),
                    Tone::Warn,
                ),
            },
            Command::Open(target) => self.open_target(&target, bridge),
            Command::Rm => self
                .transcript
                .push("What do you want to remove? You have no power here.", Tone::Warn),
            Command::RmRf => self
                .transcript
                .push("Target missing. Are you looking for '/'?", Tone::Warn),
            Command::RmRfRoot => self.transcript.push(
                "rm: cannot remove '/': Permission denied. Try sudo.",
                Tone::Warn,
            ),
            Command::Sudo => self.transcript.push(
                "sudo: a command is required. Try `sudo rm -rf /`.",
                Tone::Warn,
            ),
            Command::SudoOther(_) => self.transcript.push(
                "sudo: target not recognized. If you insist, try `sudo rm -rf /`.",
                Tone::Warn,
            ),
            Command::SudoRmRfRoot => {
                self.mode = Mode::AwaitingPassword { attempts: 0 };
            }
            Command::Unknown(line) => self
                .transcript
                .push(format!("command not found: {line}"), Tone::Warn),
        }
    }

    fn open_target(&mut self, target: &str, bridge: &mut dyn NavigationBridge) {
        let Some(route) = nav::route_for(target) else {
            self.transcript
                .push(format!("open: cannot find target '{target}'"), Tone::Warn);
            return;
        };
        self.transcript.push_normal(format!("Opening {target} ..."));
        if let Err(error) = bridge.open(route) {
            tracing::warn!(%route, %error, "navigation bridge failed");
            self.transcript
                .push(format!("open: could not launch '{target}'"), Tone::Warn);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("mode", &self.mode)
            .field("transcript_len", &self.transcript.len())
            .finish()
    }
}
