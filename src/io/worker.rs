use crate::entry::Listing;
use crate::error::PaneError;
use crate::state::{PaneId, PaneRequest};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::debug;

use super::fs::FileSystem;

pub struct IoCommand {
    pub pane: PaneId,
    pub request: PaneRequest,
}

pub enum IoResult {
    Listed {
        pane: PaneId,
        location: PathBuf,
        result: Result<Listing, PaneError>,
    },
    Created {
        pane: PaneId,
        result: Result<(), PaneError>,
    },
    Renamed {
        pane: PaneId,
        result: Result<(), PaneError>,
    },
    Deleted {
        pane: PaneId,
        result: Result<(), PaneError>,
    },
}

/// Run pane requests on a background thread.
///
/// `wake` is called after every result is posted so a UI can repaint. The
/// thread exits once the command sender is dropped.
pub fn spawn_worker<F, W>(fs: F, wake: W) -> (Sender<IoCommand>, Receiver<IoResult>)
where
    F: FileSystem + Send + 'static,
    W: Fn() + Send + 'static,
{
    let (cmd_tx, cmd_rx) = channel::<IoCommand>();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(IoCommand { pane, request }) = cmd_rx.recv() {
            debug!(pane, ?request, "io request");
            let result = match request {
                PaneRequest::List { location } => IoResult::Listed {
                    pane,
                    result: fs.list_directory(&location),
                    location,
                },
                PaneRequest::Create { name, at, kind } => IoResult::Created {
                    pane,
                    result: fs.create_item(&name, &at, kind),
                },
                PaneRequest::Rename {
                    old_name,
                    new_name,
                    at,
                } => IoResult::Renamed {
                    pane,
                    result: fs.rename_item(&old_name, &new_name, &at),
                },
                PaneRequest::Delete { path } => IoResult::Deleted {
                    pane,
                    result: fs.delete_item(&path),
                },
            };
            if res_tx.send(result).is_err() {
                break;
            }
            wake();
        }
    });

    (cmd_tx, res_rx)
}
