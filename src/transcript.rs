//! The transcript: the ordered list of output lines shown in the terminal view.
//!
//! Append-only. `clear` empties it wholesale; the id counter is never reset,
//! so ids stay unique for the lifetime of one session.

/// Visual tone of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Warn,
    Error,
}

/// One rendered output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub id: u64,
    pub text: String,
    pub tone: Tone,
}

/// Append-only sequence of output lines with a monotonic id counter.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a line with the given tone.
    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(TranscriptLine {
            id,
            text: text.into(),
            tone,
        });
    }

    /// Append a Normal-tone line.
    pub fn push_normal(&mut self, text: impl Into<String>) {
        self.push(text, Tone::Normal);
    }

    /// Empty the transcript. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drop everything and install exactly the given lines (crash recovery).
    pub fn replace_with(&mut self, lines: &[&str], tone: Tone) {
        self.lines.clear();
        for text in lines {
            self.push(*text, tone);
        }
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_across_clear() {
        let mut t = Transcript::new();
        t.push_normal("one");
        t.push_normal("two");
        let last_id = t.lines()[1].id;
        t.clear();
        assert!(t.is_empty());
        t.push_normal("three");
        assert!(t.lines()[0].id > last_id);
    }

    #[test]
    fn replace_with_installs_exactly_the_given_lines() {
        let mut t = Transcript::new();
        t.push_normal("old");
        t.replace_with(&["a", "b"], Tone::Normal);
        let texts: Vec<_> = t.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
