// src/gui/components/leaderboard.rs

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Leaderboard");
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(40.0))
        .column(Column::remainder())
        .column(Column::exact(90.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Rank");
            });
            header.col(|ui| {
                ui.strong("Team");
            });
            header.col(|ui| {
                ui.strong("Points");
            });
        })
        .body(|mut body| {
            for node in app.view.leaderboard.nodes() {
                let row = &node.value;
                body.row(20.0, |mut r| {
                    r.col(|ui| {
                        ui.label(&row.rank);
                    });
                    r.col(|ui| {
                        ui.label(&row.team);
                    });
                    r.col(|ui| {
                        ui.label(&row.points);
                    });
                });
            }
        });
}
