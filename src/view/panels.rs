// Pane, path bar and status bar rendering

use crate::app::TwinPane;
use crate::style;
use eframe::egui;
use std::cell::RefCell;
use twinpane::state::PaneId;

enum RowAction {
    Select(usize),
    Open(usize),
}

impl TwinPane {
    pub(crate) fn render_path_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("path_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("⬆ Up").clicked() {
                    self.with_active(|pane| pane.ascend());
                }
                if ui.button("⟳").on_hover_text("Reload (F5)").clicked() {
                    self.with_active(|pane| Some(pane.reload()));
                }

                let response = ui.add_sized(
                    ui.available_size() - egui::vec2(90.0, 0.0),
                    egui::TextEdit::singleline(&mut self.path_input),
                );
                if ctx.input(|i| i.key_pressed(egui::Key::L) && i.modifiers.command) {
                    response.request_focus();
                }
                if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit_path();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut show_hidden = self.panes.active().show_hidden();
                    if ui.checkbox(&mut show_hidden, "Hidden").changed() {
                        self.panes.active_mut().toggle_hidden();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let pane = self.panes.active();
                ui.label(format!("{} items", pane.visible_entries().len()));

                if let Some(entry) = pane.selected_entry() {
                    let modified: chrono::DateTime<chrono::Local> = entry.modified.into();
                    ui.label(format!(
                        "| {} | {} | {}",
                        entry.name,
                        bytesize::ByteSize(entry.size),
                        modified.format("%Y-%m-%d %H:%M")
                    ));
                }
                if !pane.type_ahead_query().is_empty() {
                    ui.label(format!("| find: {}", pane.type_ahead_query()));
                }
                if pane.is_loading() {
                    ui.spinner();
                }
                if let Some((err, _)) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!(" | {err}"));
                } else if let Some((msg, _)) = &self.info_message {
                    ui.label(format!(" | {msg}"));
                }
            });
        });
    }

    pub(crate) fn render_pane(&mut self, ui: &mut egui::Ui, id: PaneId) {
        let Some(pane) = self.panes.get(id) else {
            return;
        };
        let is_active = self.panes.active_id() == id;
        let action: RefCell<Option<RowAction>> = RefCell::new(None);

        let heading = egui::RichText::new(pane.location().display().to_string()).strong();
        ui.label(if is_active {
            heading.color(style::ACTIVE_BORDER)
        } else {
            heading
        });
        ui.separator();

        let visible = pane.visible_entries();
        let selected = pane.selection_index();

        ui.push_id(id, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("pane_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    use egui_extras::{Column, TableBuilder};
                    let mut table = TableBuilder::new(ui)
                        .striped(true)
                        .resizable(false)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::initial(style::ICON_COL_WIDTH))
                        .column(Column::remainder().clip(true));
                    if is_active && !visible.is_empty() {
                        table = table.scroll_to_row(selected, None);
                    }

                    table
                        .header(style::HEADER_HEIGHT, |mut header| {
                            header.col(|ui| {
                                ui.label("");
                            });
                            header.col(|ui| {
                                ui.label("Name");
                            });
                        })
                        .body(|body| {
                            body.rows(style::ROW_HEIGHT, visible.len(), |mut row| {
                                let row_index = row.index();
                                let entry = visible[row_index];
                                row.set_selected(row_index == selected);

                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(entry.get_icon())
                                            .size(style::ICON_SIZE),
                                    );
                                });
                                row.col(|ui| {
                                    let mut text = egui::RichText::new(entry.display_name());
                                    if entry.is_dir() {
                                        text = text.color(style::FOLDER_COLOR);
                                    }
                                    if entry.is_hidden {
                                        text = text.weak();
                                    }
                                    let response = style::truncated_label_with_sense(
                                        ui,
                                        text,
                                        egui::Sense::click(),
                                    );
                                    if response.double_clicked() {
                                        *action.borrow_mut() = Some(RowAction::Open(row_index));
                                    } else if response.clicked() {
                                        *action.borrow_mut() = Some(RowAction::Select(row_index));
                                    }
                                });
                            });
                        });
                });
        });

        // Apply deferred actions
        match action.into_inner() {
            Some(RowAction::Select(index)) => {
                self.with_pane(id, |pane| {
                    pane.select_by_index(index);
                    None
                });
            }
            Some(RowAction::Open(index)) => {
                self.with_pane(id, |pane| {
                    pane.select_by_index(index);
                    None
                });
                self.open_selected();
            }
            None => {}
        }
    }
}
