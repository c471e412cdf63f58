// Entry filter - derives the visible entries from a listing
use crate::entry::Entry;

/// Entries that should be shown, in listing order.
///
/// Hidden entries are dropped unless `show_hidden` is set. This is recomputed
/// on every call so a hidden-toggle can never leave a stale view behind.
pub fn visible_entries(listing: &[Entry], show_hidden: bool) -> Vec<&Entry> {
    listing
        .iter()
        .filter(|entry| show_hidden || !entry.is_hidden)
        .collect()
}
