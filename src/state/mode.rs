use crate::entry::EntryKind;

/// What the pane is waiting for the user to type, if anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingInput {
    #[default]
    Idle,
    Creating(EntryKind),
    Renaming,
}

impl PendingInput {
    pub fn is_idle(&self) -> bool {
        matches!(self, PendingInput::Idle)
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            PendingInput::Idle => None,
            PendingInput::Creating(EntryKind::File) => Some("New file"),
            PendingInput::Creating(EntryKind::Folder) => Some("New folder"),
            PendingInput::Renaming => Some("Rename"),
        }
    }
}

/// Relative selection movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
