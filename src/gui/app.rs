// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{
        consts::{APP_NAME, CONF_FILE, STATUS_IDLE, STATUS_OK},
        persist,
        state::AppState,
    },
    cycle::{CycleOutcome, CycleTracker},
    view::ViewState,
};

use super::{actions::refresh, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // URL text field UX (maps <-> options.feed.url)
    pub url_text: String,
    pub url_dirty: bool,

    // materialized view, owned here, mutated only via apply()
    pub view: ViewState,

    // cycle bookkeeping (workers write the inbox)
    pub tracker: CycleTracker,
    pub inbox: Arc<Mutex<Vec<CycleOutcome>>>,
    pub in_flight: usize,

    pub status: String,
    pub last_updated: Option<String>,

    // auto-refresh deadline; None while interval is Off
    pub next_tick: Option<Instant>,

    started: bool,
}

impl App {
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.options = persist::load(CONF_FILE);

        logf!(
            "Init: url={:?}, refresh={}",
            state.options.feed.url,
            state.options.feed.interval.label()
        );

        let url_text = state.options.feed.url.clone();

        Self {
            state,
            url_text,
            url_dirty: false,
            view: ViewState::default(),
            tracker: CycleTracker::default(),
            inbox: Arc::new(Mutex::new(Vec::new())),
            in_flight: 0,
            status: s!(STATUS_IDLE),
            last_updated: None,
            next_tick: None,
            started: false,
        }
    }

    pub fn save_options(&self) {
        persist::save(CONF_FILE, &self.state.options);
    }

    /// Push the URL field into options if it was edited.
    pub fn commit_url(&mut self) {
        if self.url_dirty {
            self.state.options.feed.url = s!(self.url_text.trim());
            self.url_dirty = false;
            self.save_options();
            logf!("UI: feed url → {:?}", self.state.options.feed.url);
        }
    }

    /// (Re)arm the auto-refresh deadline from the current interval.
    pub fn arm_timer(&mut self) {
        self.next_tick = self
            .state
            .options
            .feed
            .interval
            .seconds()
            .map(|s| Instant::now() + Duration::from_secs(s));
    }

    fn drain_inbox(&mut self) {
        let outcomes: Vec<CycleOutcome> = {
            let mut inbox = self.inbox.lock().unwrap();
            inbox.drain(..).collect()
        };

        for outcome in outcomes {
            self.in_flight = self.in_flight.saturating_sub(1);

            if !self.tracker.is_current(outcome.generation) {
                logd!("Cycle: gen={} superseded, dropping", outcome.generation);
                continue;
            }

            match outcome.result {
                Ok(data) => {
                    let stats = self.view.apply(&data);
                    logf!(
                        "Cycle: gen={} applied, created={} updated={} removed={}",
                        outcome.generation,
                        stats.created,
                        stats.updated,
                        stats.removed
                    );
                    self.status = s!(STATUS_OK);
                    self.last_updated =
                        Some(chrono::Local::now().format("%H:%M:%S").to_string());
                }
                Err(e) => {
                    loge!("Cycle: gen={} failed: {}", outcome.generation, e);
                    self.status = format!("Error: {}", e);
                }
            }
        }
    }

    fn tick_timer(&mut self, ctx: &egui::Context) {
        let Some(secs) = self.state.options.feed.interval.seconds() else {
            self.next_tick = None;
            return;
        };
        let period = Duration::from_secs(secs);
        match self.next_tick {
            Some(due) if Instant::now() >= due => {
                refresh::start(self, ctx);
                self.next_tick = Some(Instant::now() + period);
            }
            None => self.next_tick = Some(Instant::now() + period),
            _ => {}
        }
        if let Some(due) = self.next_tick {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame: kick off a cycle right away, like the page load
        // the feed was originally polled from.
        if !self.started {
            self.started = true;
            refresh::start(self, ctx);
            self.arm_timer();
        }

        self.drain_inbox();
        self.tick_timer(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::controls::draw(ui, self);
        });

        egui::SidePanel::right("leaderboard")
            .min_width(260.0)
            .show(ctx, |ui| {
                components::leaderboard::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::rounds::draw(ui, self);
        });
    }
}
