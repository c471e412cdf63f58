pub mod filter;
pub mod finder;
pub mod history;
pub mod mode;
pub mod pane;
pub mod panes;

pub use filter::visible_entries;
pub use finder::IncrementalFinder;
pub use history::{NavigationHistory, NavigationNode};
pub use mode::{Direction, PendingInput};
pub use pane::{PaneEvent, PaneRequest, PaneState};
pub use panes::{PaneId, PaneSet};
