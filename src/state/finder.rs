// Incremental finder - type-ahead jump to an entry by name prefix
use crate::entry::Entry;
use std::time::{Duration, Instant};

pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_millis(1000);

pub struct IncrementalFinder {
    query: String,
    idle_window: Duration,
    last_input: Option<Instant>,
}

impl IncrementalFinder {
    pub fn new(idle_window: Duration) -> Self {
        Self {
            query: String::new(),
            idle_window,
            last_input: None,
        }
    }

    /// The accumulated (lowercase) query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.last_input = None;
    }

    pub fn consume(&mut self, c: char, visible: &[&Entry]) -> Option<usize> {
        self.consume_at(c, visible, Instant::now())
    }

    /// Feed one typed character and return the index of the first matching
    /// entry.
    ///
    /// When the extended query matches nothing, the new character is dropped
    /// and the previous query is tried again, so one mistyped key does not
    /// kill the search. If that fails as well the query starts over.
    pub fn consume_at(&mut self, c: char, visible: &[&Entry], now: Instant) -> Option<usize> {
        if !c.is_alphanumeric() {
            return None;
        }

        if let Some(last) = self.last_input {
            if now.saturating_duration_since(last) > self.idle_window {
                self.query.clear();
            }
        }
        self.last_input = Some(now);

        let previous_len = self.query.len();
        self.query.extend(c.to_lowercase());

        if let Some(index) = find_prefix(visible, &self.query) {
            return Some(index);
        }

        self.query.truncate(previous_len);
        if !self.query.is_empty() {
            if let Some(index) = find_prefix(visible, &self.query) {
                return Some(index);
            }
        }

        self.query.clear();
        None
    }
}

impl Default for IncrementalFinder {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_WINDOW)
    }
}

fn find_prefix(visible: &[&Entry], query: &str) -> Option<usize> {
    visible
        .iter()
        .position(|entry| entry.name.to_lowercase().starts_with(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(*n, format!("/tmp/{n}"), EntryKind::File))
            .collect()
    }

    #[test]
    fn test_mistyped_char_falls_back_to_previous_query() {
        let listing = entries(&["abc", "abd", "xyz"]);
        let visible: Vec<&Entry> = listing.iter().collect();
        let mut finder = IncrementalFinder::default();
        let now = Instant::now();

        assert_eq!(finder.consume_at('a', &visible, now), Some(0));
        assert_eq!(finder.consume_at('b', &visible, now), Some(0));
        assert_eq!(finder.consume_at('x', &visible, now), Some(0));
        assert_eq!(finder.query(), "ab");
        assert_eq!(finder.consume_at('d', &visible, now), Some(1));
    }

    #[test]
    fn test_case_insensitive_match() {
        let listing = entries(&["Documents", "downloads"]);
        let visible: Vec<&Entry> = listing.iter().collect();
        let mut finder = IncrementalFinder::default();
        let now = Instant::now();

        assert_eq!(finder.consume_at('D', &visible, now), Some(0));
        assert_eq!(finder.consume_at('O', &visible, now), Some(0));
        assert_eq!(finder.consume_at('w', &visible, now), Some(1));
    }

    #[test]
    fn test_no_match_resets_query() {
        let listing = entries(&["abc"]);
        let visible: Vec<&Entry> = listing.iter().collect();
        let mut finder = IncrementalFinder::default();

        assert_eq!(finder.consume_at('z', &visible, Instant::now()), None);
        assert_eq!(finder.query(), "");
    }

    #[test]
    fn test_non_alphanumeric_is_ignored() {
        let listing = entries(&["abc"]);
        let visible: Vec<&Entry> = listing.iter().collect();
        let mut finder = IncrementalFinder::default();
        let now = Instant::now();

        finder.consume_at('a', &visible, now);
        assert_eq!(finder.consume_at('.', &visible, now), None);
        assert_eq!(finder.consume_at(' ', &visible, now), None);
        assert_eq!(finder.query(), "a");
    }

    #[test]
    fn test_idle_window_starts_new_query() {
        let listing = entries(&["abc", "bcd"]);
        let visible: Vec<&Entry> = listing.iter().collect();
        let mut finder = IncrementalFinder::new(Duration::from_millis(500));
        let start = Instant::now();

        assert_eq!(finder.consume_at('a', &visible, start), Some(0));
        let later = start + Duration::from_secs(2);
        assert_eq!(finder.consume_at('b', &visible, later), Some(1));
        assert_eq!(finder.query(), "b");
    }

    #[test]
    fn test_empty_visible_list() {
        let mut finder = IncrementalFinder::default();
        assert_eq!(finder.consume_at('a', &[], Instant::now()), None);
    }
}
