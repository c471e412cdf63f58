use crate::style::{self, Theme};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;
use tracing::{info, warn};
use twinpane::config::Config;
use twinpane::io::{self, DirectoryWatcher, IoCommand, IoResult, StdFileSystem};
use twinpane::state::{PaneId, PaneRequest, PaneSet, PaneState};
use twinpane::PaneError;

pub struct TwinPane {
    pub panes: PaneSet,
    pub command_tx: Sender<IoCommand>,
    pub result_rx: Receiver<IoResult>,
    pub watchers: Vec<Option<DirectoryWatcher>>,

    // Prompt state for create/rename and the path bar
    pub input_buffer: String,
    pub rename_target: Option<String>,
    pub focus_input: bool,
    pub path_input: String,
    pub delete_confirm: bool,

    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl TwinPane {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Theme::from_config(&config.theme.mode).apply(&cc.egui_ctx);
        style::apply_font_size(&cc.egui_ctx, config.font.font_size);

        let repaint_ctx = cc.egui_ctx.clone();
        let (command_tx, result_rx) =
            io::spawn_worker(StdFileSystem, move || repaint_ctx.request_repaint());

        let nav = &config.navigation;
        let start = nav.start_dir.clone().unwrap_or_else(io::home_directory);
        let new_pane =
            || PaneState::with_options(start.clone(), nav.show_hidden, nav.type_ahead_window());

        let mut panes = PaneSet::new(new_pane());
        panes.add(new_pane());

        let watchers = panes
            .ids()
            .map(|_| {
                if !nav.watch_directories {
                    return None;
                }
                let ctx = cc.egui_ctx.clone();
                match DirectoryWatcher::new(move || ctx.request_repaint()) {
                    Ok(watcher) => Some(watcher),
                    Err(e) => {
                        warn!("directory watching disabled: {e}");
                        None
                    }
                }
            })
            .collect();

        let mut app = Self {
            panes,
            command_tx,
            result_rx,
            watchers,
            input_buffer: String::new(),
            rename_target: None,
            focus_input: false,
            path_input: start.display().to_string(),
            delete_confirm: false,
            error_message: None,
            info_message: None,
        };

        for id in app.panes.ids() {
            if let Some(pane) = app.panes.get_mut(id) {
                let request = pane.refresh();
                app.send(id, request);
            }
            if let Some(Some(watcher)) = app.watchers.get_mut(id) {
                watcher.watch(&start);
            }
        }
        app
    }

    /// Hand a pane request to the worker thread.
    pub fn send(&mut self, pane: PaneId, request: Option<PaneRequest>) {
        let Some(request) = request else {
            return;
        };
        if self.command_tx.send(IoCommand { pane, request }).is_err() {
            self.set_error("I/O worker stopped".to_string());
        }
    }

    /// Run a pane operation and dispatch what it asks for.
    pub fn with_pane<F>(&mut self, id: PaneId, op: F)
    where
        F: FnOnce(&mut PaneState) -> Option<PaneRequest>,
    {
        let Some(pane) = self.panes.get_mut(id) else {
            return;
        };
        let request = op(pane);
        self.send(id, request);
        self.sync_pane(id);
    }

    pub fn with_active<F>(&mut self, op: F)
    where
        F: FnOnce(&mut PaneState) -> Option<PaneRequest>,
    {
        self.with_pane(self.panes.active_id(), op);
    }

    /// Apply pane events: activation, and re-pointing the watcher and path
    /// bar after a location change.
    pub fn sync_pane(&mut self, id: PaneId) {
        if let Some(location) = self.panes.dispatch_events(id) {
            if let Some(Some(watcher)) = self.watchers.get_mut(id) {
                watcher.watch(&location);
            }
        }
        self.path_input = self.panes.active().location().display().to_string();
    }

    pub fn process_io_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            let (id, outcome) = match result {
                IoResult::Listed {
                    pane,
                    location,
                    result,
                } => {
                    let outcome = match self.panes.get_mut(pane) {
                        Some(state) => state.apply_listing(location, result).map(|()| None),
                        None => continue,
                    };
                    (pane, outcome)
                }
                IoResult::Created { pane, result } => {
                    let Some(state) = self.panes.get_mut(pane) else {
                        continue;
                    };
                    let outcome = state.apply_create_result(result);
                    (pane, self.notify_done(outcome, "Created"))
                }
                IoResult::Renamed { pane, result } => {
                    let Some(state) = self.panes.get_mut(pane) else {
                        continue;
                    };
                    let outcome = state.apply_rename_result(result);
                    (pane, self.notify_done(outcome, "Renamed"))
                }
                IoResult::Deleted { pane, result } => {
                    let Some(state) = self.panes.get_mut(pane) else {
                        continue;
                    };
                    let outcome = state.apply_delete_result(result);
                    (pane, self.notify_done(outcome, "Moved to trash"))
                }
            };

            match outcome {
                Ok(request) => self.send(id, request),
                Err(e) if e.is_surfaced() => self.set_error(e.to_string()),
                Err(_) => {}
            }
        }
    }

    fn notify_done(
        &mut self,
        outcome: Result<Option<PaneRequest>, PaneError>,
        message: &str,
    ) -> Result<Option<PaneRequest>, PaneError> {
        if outcome.is_ok() {
            self.set_info(message.to_string());
        }
        outcome
    }

    pub fn poll_watchers(&mut self) {
        for id in self.panes.ids() {
            let changed = matches!(self.watchers.get(id), Some(Some(w)) if w.take_change());
            if changed {
                let request = self
                    .panes
                    .get_mut(id)
                    .and_then(PaneState::notify_external_change);
                self.send(id, request);
            }
        }
    }

    /// Enter the selected folder, or open the selected file externally.
    pub fn open_selected(&mut self) {
        let Some(entry) = self.panes.active().selected_entry().cloned() else {
            return;
        };
        if entry.is_dir() {
            self.with_active(|pane| pane.descend(entry.path));
        } else if let Err(e) = open::that(&entry.path) {
            self.set_error(format!("Could not open file: {e}"));
        }
    }

    pub fn submit_path(&mut self) {
        let path = PathBuf::from(self.path_input.trim());
        if path.is_dir() {
            self.with_active(|pane| pane.navigate_to(path));
        } else {
            self.set_error(format!("Not a directory: {}", path.display()));
        }
    }

    pub fn set_error(&mut self, message: String) {
        warn!("{message}");
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        info!("{message}");
        self.info_message = Some((message, Instant::now()));
    }

    fn clear_expired_messages(&mut self) {
        let timeout = style::MESSAGE_TIMEOUT_SECS;
        for slot in [&mut self.error_message, &mut self.info_message] {
            if slot
                .as_ref()
                .is_some_and(|(_, time)| time.elapsed().as_secs() >= timeout)
            {
                *slot = None;
            }
        }
    }
}

impl eframe::App for TwinPane {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_io_results();
        self.poll_watchers();
        self.handle_input(ctx);
        self.clear_expired_messages();

        self.render_path_bar(ctx);
        self.render_status_bar(ctx);
        self.render_input_modal(ctx);
        self.render_delete_modal(ctx);

        let half = ctx.input(|i| {
            i.viewport()
                .inner_rect
                .map(|r| r.width() / 2.0)
                .unwrap_or(500.0)
        });
        egui::SidePanel::left("left_pane")
            .resizable(true)
            .default_width(half)
            .show(ctx, |ui| self.render_pane(ui, 0));
        egui::CentralPanel::default().show(ctx, |ui| self.render_pane(ui, 1));

        // Messages expire without further input
        if self.error_message.is_some() || self.info_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
