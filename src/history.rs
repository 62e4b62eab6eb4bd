//! Command history with arrow-key recall.
//!
//! Recall temporarily replaces the input buffer with a prior command. The
//! in-progress text is stashed as a draft on the first recall-up and comes
//! back after recalling down past the newest entry. Edits made to a recalled
//! entry are never written back into history; submitting an edited recall
//! appends it as a new entry.

/// Append-only command history plus a movable recall cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
    draft: String,
}

impl History {
    /// Fresh history, pre-seeded with the bait so the very first ArrowUp
    /// offers `sudo rm -rf /`.
    pub fn new() -> Self {
        Self {
            entries: vec!["sudo rm -rf /".to_string()],
            cursor: None,
            draft: String::new(),
        }
    }

    /// Empty history (tests).
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            draft: String::new(),
        }
    }

    #[cfg(test)]
    pub fn from_entries<I: IntoIterator<Item = S>, S: Into<String>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            cursor: None,
            draft: String::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Record a submitted command and drop any active recall.
    pub fn record(&mut self, command: &str) {
        self.entries.push(command.to_string());
        self.cursor = None;
        self.draft.clear();
    }

    /// The input buffer changed while composing. Only tracked while no
    /// recall is active; edits to a recalled entry stay local to the buffer.
    pub fn note_edit(&mut self, buffer: &str) {
        if self.cursor.is_none() {
            self.draft.clear();
            self.draft.push_str(buffer);
        }
    }

    /// ArrowUp. Returns the text the input buffer should now show, or `None`
    /// when history is empty.
    pub fn recall_up(&mut self, buffer: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => {
                self.draft.clear();
                self.draft.push_str(buffer);
                self.entries.len() - 1
            }
            // Floored at the oldest entry; repeats, does not wrap.
            Some(cur) => cur.saturating_sub(1),
        };
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    /// ArrowDown. Returns the text the input buffer should now show, or
    /// `None` when no recall is active.
    pub fn recall_down(&mut self) -> Option<String> {
        let cur = self.cursor?;
        if cur + 1 >= self.entries.len() {
            self.cursor = None;
            return Some(self.draft.clone());
        }
        self.cursor = Some(cur + 1);
        Some(self.entries[cur + 1].clone())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
