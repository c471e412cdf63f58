// Pane collection - owns the panes and tracks which one is active
use crate::state::pane::{PaneEvent, PaneState};
use std::path::PathBuf;

pub type PaneId = usize;

pub struct PaneSet {
    panes: Vec<PaneState>,
    active: PaneId,
}

impl PaneSet {
    pub fn new(first: PaneState) -> Self {
        Self {
            panes: vec![first],
            active: 0,
        }
    }

    pub fn add(&mut self, pane: PaneState) -> PaneId {
        self.panes.push(pane);
        self.panes.len() - 1
    }

    pub fn get(&self, id: PaneId) -> Option<&PaneState> {
        self.panes.get(id)
    }

    pub fn get_mut(&mut self, id: PaneId) -> Option<&mut PaneState> {
        self.panes.get_mut(id)
    }

    pub fn active_id(&self) -> PaneId {
        self.active
    }

    pub fn active(&self) -> &PaneState {
        &self.panes[self.active]
    }

    pub fn active_mut(&mut self) -> &mut PaneState {
        &mut self.panes[self.active]
    }

    pub fn activate(&mut self, id: PaneId) {
        if id < self.panes.len() {
            self.active = id;
        }
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.panes.len();
    }

    pub fn ids(&self) -> std::ops::Range<PaneId> {
        0..self.panes.len()
    }

    /// Handle the events a pane emitted. Activation is applied here; the new
    /// locations of panes that moved are returned for the caller.
    pub fn dispatch_events(&mut self, id: PaneId) -> Option<PathBuf> {
        let events = self.panes.get_mut(id)?.drain_events();
        let mut moved_to = None;
        for event in events {
            match event {
                PaneEvent::Activated => self.activate(id),
                PaneEvent::LocationChanged(location) => moved_to = Some(location),
            }
        }
        moved_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};

    fn pane(location: &str) -> PaneState {
        PaneState::new(PathBuf::from(location))
    }

    #[test]
    fn test_activation_event_switches_active_pane() {
        let mut panes = PaneSet::new(pane("/left"));
        let right = panes.add(pane("/right"));
        assert_eq!(panes.active_id(), 0);

        let right_pane = panes.get_mut(right).unwrap();
        right_pane.refresh();
        right_pane
            .apply_listing(
                PathBuf::from("/right"),
                Ok(vec![Entry::new("a", "/right/a", EntryKind::File)]),
            )
            .unwrap();
        right_pane.select_by_index(0);

        assert_eq!(panes.dispatch_events(right), None);
        assert_eq!(panes.active_id(), right);
    }

    #[test]
    fn test_location_change_is_reported() {
        let mut panes = PaneSet::new(pane("/left"));
        panes.active_mut().navigate_to(PathBuf::from("/tmp"));
        assert_eq!(panes.dispatch_events(0), Some(PathBuf::from("/tmp")));
        assert_eq!(panes.dispatch_events(0), None);
    }

    #[test]
    fn test_next_cycles() {
        let mut panes = PaneSet::new(pane("/a"));
        panes.add(pane("/b"));
        panes.next();
        assert_eq!(panes.active().location(), std::path::Path::new("/b"));
        panes.next();
        assert_eq!(panes.active_id(), 0);
        panes.activate(7);
        assert_eq!(panes.active_id(), 0);
    }
}
