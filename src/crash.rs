//! Crash variants and the data behind each presentation.
//!
//! A successful `sudo rm -rf /` picks one of three presentations uniformly
//! at random: a kernel-panic log, a mock "unauthorized command intercepted"
//! modal, or a minimal overlay with falling matrix-style glyphs. Each
//! variant carries a fixed pair of recovery lines that become the whole
//! transcript after rollback. All of this is data, not computed.

use crate::services::RandomSource;

/// One of the fixed crash presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashVariant {
    Kernel,
    Humor,
    Minimal,
}

impl CrashVariant {
    pub const ALL: [CrashVariant; 3] =
        [CrashVariant::Kernel, CrashVariant::Humor, CrashVariant::Minimal];

    /// Pick a variant uniformly from the fixed set.
    pub fn pick(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    /// The two lines installed as the fresh transcript on rollback.
    pub fn recovery_lines(self) -> [&'static str; 2] {
        match self {
            CrashVariant::Kernel => [
                "Rollback complete. Kernel stabilized and init restored.",
                "Diagnostic note: / is still protected. Maybe try `help` instead of chaos.",
            ],
            CrashVariant::Humor => [
                "Rollback complete. The System Cat has stepped away from the keyboard.",
                "Treat debt forgiven. You may continue in guest mode.",
            ],
            CrashVariant::Minimal => [
                "Rollback complete. Reality.exe restored from clean snapshot.",
                "Matrix rain stopped. Filesystem integrity: green.",
            ],
        }
    }

    /// Body copy for the overlay, excluding the recovery hint.
    pub fn overlay_lines(self) -> &'static [&'static str] {
        match self {
            CrashVariant::Kernel => &[
                "[  0.001234] Kernel panic - not syncing: Attempted to kill init! exitcode=0x00000000",
                "[  0.002567] rm: cannot remove '/': Permission denied (Nice try, kid.)",
                "[  1.042069] System halted. Please refresh to restore reality.",
            ],
            CrashVariant::Humor => &[
                "[ERROR] UNAUTHORIZED DESTRUCTIVE COMMAND",
                "sudo: guest is not in the sudoers file. This incident will be reported.",
                "Oops. You tried to delete my hard work. Luckily, this code lives on GitHub.",
                "Your destructive command was intercepted by the System Cat. Please provide treats to continue.",
            ],
            CrashVariant::Minimal => &[
                "Deleting your boredom... [100%]",
                "Error: Reality.exe cannot be deleted.",
            ],
        }
    }

    /// Hint shown at the bottom of every overlay.
    pub fn recovery_hint(self) -> &'static str {
        "Press any key to rollback."
    }
}

/// Glyphs the minimal variant rains down the screen.
pub const RAIN_CHARSET: &[char] = &['0', '1', '/', '$', '#', ';', '[', ']'];

const RAIN_GLYPH_COUNT: usize = 36;

/// One falling character in the minimal-variant overlay.
///
/// `column` is a percentage of the terminal width; `duration` and `delay`
/// are in milliseconds. Position at render time is pure arithmetic over the
/// elapsed time since the crash, so the animation owns no timer of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub column: f32,
    pub glyph: char,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Generate the fixed-size rain field for one crash episode.
pub fn rain_field(rng: &mut dyn RandomSource) -> Vec<RainGlyph> {
    (0..RAIN_GLYPH_COUNT)
        .map(|_| RainGlyph {
            column: rng.unit() * 100.0,
            glyph: RAIN_CHARSET[rng.pick_index(RAIN_CHARSET.len())],
            duration_ms: 1800 + (rng.unit() * 2200.0) as u32,
            delay_ms: (rng.unit() * 900.0) as u32,
        })
        .collect()
}
