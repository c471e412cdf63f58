// Create/rename prompt and delete confirmation

use crate::app::TwinPane;
use crate::style;
use eframe::egui;

impl TwinPane {
    pub(crate) fn render_input_modal(&mut self, ctx: &egui::Context) {
        let Some(title) = self.panes.active().pending_input().prompt() else {
            return;
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                let response = ui.text_edit_singleline(&mut self.input_buffer);
                if self.focus_input {
                    response.request_focus();
                    self.focus_input = false;
                }
                ui.add_space(5.0);
                ui.label("Enter to confirm, Esc to cancel");
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.submit_input();
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel_prompt();
                    }
                });
            });
    }

    pub(crate) fn render_delete_modal(&mut self, ctx: &egui::Context) {
        if !self.delete_confirm {
            return;
        }
        let name = self
            .panes
            .active()
            .selected_entry()
            .map(|e| e.name.clone())
            .unwrap_or_default();

        egui::Window::new("Move to trash")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!("Move \"{name}\" to the trash?"));
                ui.add_space(5.0);
                ui.label("y / Enter to confirm, n / Esc to cancel");
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.delete_confirm = false;
                        let id = self.panes.active_id();
                        let request = self.panes.active().request_delete();
                        self.send(id, request);
                    }
                    if ui.button("Cancel").clicked() {
                        self.delete_confirm = false;
                    }
                });
            });
    }
}
