// src/gui/components/rounds.rs
//
// Three round columns of match cards, drawn straight from the view
// snapshots. Purely a painter; all mutation happened in apply().

use eframe::egui::{self, Align, Layout, RichText};

use crate::{config::consts::ROUND_TITLES, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.columns(3, |cols| {
        for (i, col) in cols.iter_mut().enumerate() {
            col.heading(ROUND_TITLES[i]);
            col.separator();

            egui::ScrollArea::vertical()
                .id_salt(("round", i))
                .show(col, |ui| {
                    for node in app.view.rounds[i].nodes() {
                        let card = &node.value;
                        ui.group(|ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&card.title).strong());
                            for team in card.teams.nodes() {
                                let row = &team.value;
                                ui.horizontal(|ui| {
                                    ui.label(&row.name);
                                    ui.with_layout(
                                        Layout::right_to_left(Align::Center),
                                        |ui| {
                                            ui.label(RichText::new(&row.score).monospace());
                                        },
                                    );
                                });
                            }
                        });
                        ui.add_space(6.0);
                    }
                });
        }
    });
}
