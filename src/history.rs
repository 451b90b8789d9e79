use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Bounded log of raw input lines, oldest first.
///
/// Once full, every new entry pushes the oldest one out.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Append a line exactly as it was typed.
    pub fn record(&mut self, entry: &str) {
        if self.max_entries == 0 {
            return;
        }

        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_owned());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries paired with their 1-based display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}
