// src/gui/actions/refresh.rs
use std::thread;

use eframe::egui;

use crate::{cycle::CycleOutcome, feed, gui::app::App};

/// Start one ingestion cycle on a worker thread. No cancellation:
/// an older in-flight fetch keeps running, but its outcome carries a
/// stale generation and gets dropped on arrival.
pub fn start(app: &mut App, ctx: &egui::Context) {
    app.commit_url();

    let generation = app.tracker.begin();
    app.in_flight += 1;

    let url = app.state.options.feed.url.clone();
    let inbox = app.inbox.clone();
    let ctx2 = ctx.clone();

    logf!("Cycle: gen={} begin, url={:?}", generation, url);

    thread::spawn(move || {
        let result = feed::fetch(&url);
        inbox.lock().unwrap().push(CycleOutcome { generation, result });
        ctx2.request_repaint();
    });
}
