// src/gui/components/controls.rs
//
// Top bar: refresh button, auto-refresh interval, feed URL field,
// status + last-updated line. The URL field uses the dirty-text
// idiom: edits mark it dirty, the next refresh commits it.

use eframe::egui;

use crate::{
    config::options::RefreshInterval,
    gui::{actions::refresh, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Refresh now").clicked() {
            let ctx = ui.ctx().clone();
            refresh::start(app, &ctx);
        }

        let before = app.state.options.feed.interval;
        let mut selected = before;
        egui::ComboBox::from_label("Auto refresh")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for iv in RefreshInterval::ALL {
                    ui.selectable_value(&mut selected, iv, iv.label());
                }
            });
        if selected != before {
            app.state.options.feed.interval = selected;
            logf!("UI: refresh interval → {}", selected.label());
            app.arm_timer();
            app.save_options();
        }

        if app.in_flight > 0 {
            ui.spinner();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Feed URL:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.url_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
        if resp.changed() {
            app.url_dirty = true;
        }
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            app.commit_url();
            let ctx = ui.ctx().clone();
            refresh::start(app, &ctx);
        }
    });

    ui.horizontal(|ui| {
        ui.label(format!("Status: {}", app.status));
        if let Some(ts) = &app.last_updated {
            ui.separator();
            ui.label(format!("Last updated: {}", ts));
        }
    });
}
