// Pane state - location, listing, selection and pending input of one pane
use crate::entry::{Entry, EntryKind, Listing};
use crate::error::PaneError;
use crate::io::parent_of;
use crate::state::filter::visible_entries;
use crate::state::finder::IncrementalFinder;
use crate::state::history::{NavigationHistory, NavigationNode};
use crate::state::mode::{Direction, PendingInput};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// I/O the pane needs performed. The caller executes it and feeds the
/// outcome back through the matching `apply_*` method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaneRequest {
    List {
        location: PathBuf,
    },
    Create {
        name: String,
        at: PathBuf,
        kind: EntryKind,
    },
    Rename {
        old_name: String,
        new_name: String,
        at: PathBuf,
    },
    Delete {
        path: PathBuf,
    },
}

/// Notifications for whoever owns the pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaneEvent {
    /// The user picked an entry in this pane directly; it should become the
    /// active pane.
    Activated,
    LocationChanged(PathBuf),
}

pub struct PaneState {
    location: PathBuf,
    listing: Listing,
    selection_index: usize,
    show_hidden: bool,
    pending_input: PendingInput,
    just_deleted: bool,
    history: NavigationHistory,
    finder: IncrementalFinder,
    // Location of the in-flight listing request.
    loading: Option<PathBuf>,
    // Location as of the last refresh decision.
    refreshed_location: Option<PathBuf>,
    input_committed: bool,
    events: Vec<PaneEvent>,
}

impl PaneState {
    pub fn new(home: PathBuf) -> Self {
        Self::with_options(home, false, crate::state::finder::DEFAULT_IDLE_WINDOW)
    }

    pub fn with_options(home: PathBuf, show_hidden: bool, type_ahead_window: Duration) -> Self {
        Self {
            location: home,
            listing: Vec::new(),
            selection_index: 0,
            show_hidden,
            pending_input: PendingInput::Idle,
            just_deleted: false,
            history: NavigationHistory::new(),
            finder: IncrementalFinder::new(type_ahead_window),
            loading: None,
            refreshed_location: None,
            input_committed: false,
            events: Vec::new(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    pub fn selection_index(&self) -> usize {
        self.selection_index
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn pending_input(&self) -> PendingInput {
        self.pending_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn type_ahead_query(&self) -> &str {
        self.finder.query()
    }

    pub fn visible_entries(&self) -> Vec<&Entry> {
        visible_entries(&self.listing, self.show_hidden)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.visible_entries().get(self.selection_index).copied()
    }

    pub fn drain_events(&mut self) -> Vec<PaneEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Navigation ---

    pub fn descend(&mut self, child: PathBuf) -> Option<PaneRequest> {
        if child == self.location {
            return None;
        }
        debug!(from = %self.location.display(), to = %child.display(), "descend");
        self.history.push(NavigationNode {
            location: self.location.clone(),
            selection_index: self.selection_index,
            listing: self.listing.clone(),
        });
        self.set_location(child);
        self.refresh()
    }

    /// Go to the parent location. Does nothing at the filesystem root.
    pub fn ascend(&mut self) -> Option<PaneRequest> {
        let parent = parent_of(&self.location)?;
        debug!(from = %self.location.display(), to = %parent.display(), "ascend");
        self.set_location(parent);
        self.refresh()
    }

    /// Jump somewhere that is not a child of the current location, e.g. a
    /// typed path. History is dropped since it no longer leads back here.
    pub fn navigate_to(&mut self, location: PathBuf) -> Option<PaneRequest> {
        if location == self.location {
            return None;
        }
        debug!(to = %location.display(), "navigate");
        self.history.clear();
        self.set_location(location);
        self.refresh()
    }

    fn set_location(&mut self, location: PathBuf) {
        self.location = location;
        self.selection_index = 0;
        self.finder.reset();
        self.events
            .push(PaneEvent::LocationChanged(self.location.clone()));
    }

    // --- Selection ---

    pub fn move_selection(&mut self, direction: Direction) {
        let len = self.visible_entries().len();
        match direction {
            Direction::Up if self.selection_index > 0 => self.selection_index -= 1,
            Direction::Down if self.selection_index + 1 < len => self.selection_index += 1,
            _ => {}
        }
    }

    pub fn select_by_index(&mut self, index: usize) {
        self.selection_index = index;
        self.clamp_selection();
        self.events.push(PaneEvent::Activated);
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.clamp_selection();
    }

    /// Type-ahead: jump to the first visible entry matching the typed prefix.
    pub fn type_ahead(&mut self, c: char) -> Option<usize> {
        let found = {
            let visible = visible_entries(&self.listing, self.show_hidden);
            self.finder.consume(c, &visible)
        };
        if let Some(index) = found {
            self.selection_index = index;
        }
        found
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        self.selection_index = self.selection_index.min(len.saturating_sub(1));
    }

    // --- Create / rename / delete ---

    pub fn begin_create(&mut self, kind: EntryKind) -> Result<(), PaneError> {
        if !self.pending_input.is_idle() {
            return Err(PaneError::InvalidTransition("create while input is pending"));
        }
        self.pending_input = PendingInput::Creating(kind);
        Ok(())
    }

    /// Finish a create prompt. An empty or missing name cancels silently.
    pub fn commit_create(&mut self, name: Option<&str>) -> Result<Option<PaneRequest>, PaneError> {
        let PendingInput::Creating(kind) = self.pending_input else {
            return Err(PaneError::InvalidTransition("commit_create without create prompt"));
        };
        self.pending_input = PendingInput::Idle;

        Ok(name.filter(|n| !n.is_empty()).map(|name| PaneRequest::Create {
            name: name.to_string(),
            at: self.location.clone(),
            kind,
        }))
    }

    pub fn begin_rename(&mut self) -> Result<(), PaneError> {
        if !self.pending_input.is_idle() {
            return Err(PaneError::InvalidTransition("rename while input is pending"));
        }
        if self.selected_entry().is_none() {
            return Err(PaneError::InvalidTransition("rename with nothing selected"));
        }
        self.pending_input = PendingInput::Renaming;
        Ok(())
    }

    /// Finish a rename prompt. Missing names, or an unchanged name, cancel.
    pub fn commit_rename(
        &mut self,
        old_name: Option<&str>,
        new_name: Option<&str>,
    ) -> Result<Option<PaneRequest>, PaneError> {
        if self.pending_input != PendingInput::Renaming {
            return Err(PaneError::InvalidTransition("commit_rename without rename prompt"));
        }
        self.pending_input = PendingInput::Idle;

        let request = match (old_name, new_name) {
            (Some(old), Some(new)) if !old.is_empty() && !new.is_empty() && old != new => {
                Some(PaneRequest::Rename {
                    old_name: old.to_string(),
                    new_name: new.to_string(),
                    at: self.location.clone(),
                })
            }
            _ => None,
        };
        Ok(request)
    }

    /// Leave a create or rename prompt without doing anything.
    pub fn cancel_input(&mut self) {
        self.pending_input = PendingInput::Idle;
    }

    /// Trash request for the selected entry.
    pub fn request_delete(&self) -> Option<PaneRequest> {
        self.selected_entry().map(|entry| PaneRequest::Delete {
            path: entry.path.clone(),
        })
    }

    pub fn notify_deleted(&mut self) -> Option<PaneRequest> {
        self.just_deleted = true;
        self.refresh()
    }

    /// Something changed on disk under the current location.
    pub fn notify_external_change(&mut self) -> Option<PaneRequest> {
        self.notify_deleted()
    }

    // --- I/O completions ---

    /// Fold a finished listing into the pane.
    ///
    /// Results for a location the pane has since left are discarded with
    /// [`PaneError::StaleResponse`]. A failed listing keeps the previous one.
    pub fn apply_listing(
        &mut self,
        location: PathBuf,
        result: Result<Listing, PaneError>,
    ) -> Result<(), PaneError> {
        if location != self.location {
            debug!(requested = %location.display(), current = %self.location.display(), "dropping stale listing");
            return Err(PaneError::StaleResponse {
                requested: location,
                current: self.location.clone(),
            });
        }
        if self.loading.as_deref() == Some(location.as_path()) {
            self.loading = None;
        }

        match result {
            Ok(listing) => {
                self.listing = listing;
                self.clamp_selection();
                Ok(())
            }
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    /// Outcome of a create request. Input mode is not rolled back on failure.
    pub fn apply_create_result(
        &mut self,
        result: Result<(), PaneError>,
    ) -> Result<Option<PaneRequest>, PaneError> {
        self.apply_input_result(result)
    }

    /// Outcome of a rename request. Input mode is not rolled back on failure.
    pub fn apply_rename_result(
        &mut self,
        result: Result<(), PaneError>,
    ) -> Result<Option<PaneRequest>, PaneError> {
        self.apply_input_result(result)
    }

    fn apply_input_result(
        &mut self,
        result: Result<(), PaneError>,
    ) -> Result<Option<PaneRequest>, PaneError> {
        match result {
            Ok(()) => {
                self.input_committed = true;
                Ok(self.refresh())
            }
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    pub fn apply_delete_result(
        &mut self,
        result: Result<(), PaneError>,
    ) -> Result<Option<PaneRequest>, PaneError> {
        match result {
            Ok(()) => Ok(self.notify_deleted()),
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    // --- Refresh ---

    /// Decide whether the listing must be refetched.
    ///
    /// Nothing happens unless the location moved, a create/rename cycle just
    /// completed, or a delete was reported. When the location moved back to
    /// the top of the history, the saved snapshot is adopted instead of
    /// listing again.
    pub fn refresh(&mut self) -> Option<PaneRequest> {
        let moved = self.refreshed_location.as_deref() != Some(self.location.as_path());
        if !moved && !self.input_committed && !self.just_deleted {
            return None;
        }
        self.just_deleted = false;
        self.input_committed = false;
        self.refreshed_location = Some(self.location.clone());

        if moved && self.history.peek_matches(&self.location) {
            if let Some(node) = self.history.pop() {
                debug!(location = %node.location.display(), "restored from history");
                self.listing = node.listing;
                self.selection_index = node.selection_index;
                self.loading = None;
                self.clamp_selection();
                return None;
            }
        }

        Some(self.list_request())
    }

    /// Unconditionally list the current location again.
    pub fn reload(&mut self) -> PaneRequest {
        self.just_deleted = false;
        self.refreshed_location = Some(self.location.clone());
        self.list_request()
    }

    fn list_request(&mut self) -> PaneRequest {
        self.loading = Some(self.location.clone());
        PaneRequest::List {
            location: self.location.clone(),
        }
    }
}
