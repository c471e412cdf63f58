// Keyboard handling for the active pane

use crate::app::TwinPane;
use eframe::egui;
use tracing::debug;
use twinpane::state::{Direction, PendingInput};
use twinpane::EntryKind;

impl TwinPane {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // 1. Create / rename prompt
        if !self.panes.active().pending_input().is_idle() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit_input();
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.cancel_prompt();
            }
            return;
        }

        // 2. Delete confirmation
        if self.delete_confirm {
            if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                self.delete_confirm = false;
                let id = self.panes.active_id();
                let request = self.panes.active().request_delete();
                self.send(id, request);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                self.delete_confirm = false;
            }
            return;
        }

        // The path bar has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        let (command, shift) = ctx.input(|i| (i.modifiers.command, i.modifiers.shift));

        // 3. Pane switching and movement
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.panes.next();
            self.sync_pane(self.panes.active_id());
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.panes.active_mut().move_selection(Direction::Down);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.panes.active_mut().move_selection(Direction::Up);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::ArrowRight)) {
            self.open_selected();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace) || i.key_pressed(egui::Key::ArrowLeft)) {
            self.with_active(|pane| pane.ascend());
            return;
        }

        // 4. Pane commands
        if command && ctx.input(|i| i.key_pressed(egui::Key::H)) {
            self.panes.active_mut().toggle_hidden();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.with_active(|pane| Some(pane.reload()));
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F2)) {
            self.start_rename();
            return;
        }
        if command && ctx.input(|i| i.key_pressed(egui::Key::N)) {
            let kind = if shift { EntryKind::Folder } else { EntryKind::File };
            self.start_create(kind);
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            if self.panes.active().selected_entry().is_some() {
                self.delete_confirm = true;
            }
            return;
        }

        // 5. Type-ahead
        if !command {
            let typed: Vec<char> = ctx.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::Text(text) => Some(text.clone()),
                        _ => None,
                    })
                    .flat_map(|text| text.chars().collect::<Vec<_>>())
                    .collect()
            });
            for c in typed {
                self.panes.active_mut().type_ahead(c);
            }
        }
    }

    fn start_create(&mut self, kind: EntryKind) {
        match self.panes.active_mut().begin_create(kind) {
            Ok(()) => {
                self.input_buffer.clear();
                self.focus_input = true;
            }
            Err(e) => debug!("{e}"),
        }
    }

    fn start_rename(&mut self) {
        let pane = self.panes.active_mut();
        match pane.begin_rename() {
            Ok(()) => {
                let name = pane.selected_entry().map(|e| e.name.clone());
                self.input_buffer = name.clone().unwrap_or_default();
                self.rename_target = name;
                self.focus_input = true;
            }
            Err(e) => debug!("{e}"),
        }
    }

    pub(crate) fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        let name = text.trim();
        let target = self.rename_target.take();
        let id = self.panes.active_id();
        let pane = self.panes.active_mut();

        let result = match pane.pending_input() {
            PendingInput::Creating(_) => pane.commit_create(Some(name)),
            PendingInput::Renaming => pane.commit_rename(target.as_deref(), Some(name)),
            PendingInput::Idle => Ok(None),
        };
        match result {
            Ok(request) => self.send(id, request),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub(crate) fn cancel_prompt(&mut self) {
        self.panes.active_mut().cancel_input();
        self.input_buffer.clear();
        self.rename_target = None;
    }
}
