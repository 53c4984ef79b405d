//! Search flow: spawn the fetch, poll the queue, swap screens

use super::{App, Screen, WeatherView};
use crate::constants::*;
use crate::imagery::background_for;
use crate::types::*;
use crate::ui::animation::SlideIn;
use crate::ui::layout::{CONDITIONS_SLIDE, TEMP_SLIDE};
use crate::weather;
use eframe::egui;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;
use tracing::{debug, error, info};

const TEMP_SLIDE_DELAY: Duration = Duration::from_millis(100);
const CONDITIONS_SLIDE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Request bookkeeping. Only the most recent request may update the view.
#[derive(Debug, Default)]
pub struct SearchState {
    next_id: u64,
    pending: Option<u64>,
    phase: Phase,
}

impl SearchState {
    /// Start a new request, superseding any outstanding one
    pub fn begin(&mut self) -> u64 {
        self.next_id += 1;
        self.pending = Some(self.next_id);
        self.phase = Phase::Loading;
        self.next_id
    }

    /// Record a result. Returns false for a result nobody is waiting for.
    pub fn finish(&mut self, request_id: u64, ok: bool) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.pending = None;
        self.phase = if ok { Phase::Success } else { Phase::Error };
        true
    }

    /// Input was rejected before any request was made
    pub fn reject(&mut self) {
        self.pending = None;
        self.phase = Phase::Error;
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl App {
    pub fn search(&mut self, ctx: &egui::Context) {
        let city = self.city_query.trim().to_string();
        if city.is_empty() {
            self.search_state.reject();
            self.set_default_appearance(MSG_EMPTY_CITY);
            return;
        }

        let request_id = self.search_state.begin();
        self.settings.last_city = city.clone();
        let request = FetchRequest {
            request_id,
            city,
            api_key: self.api_key.clone(),
            units: self.settings.units,
        };

        // Worker is detached; it sends one result and exits
        match weather::spawn_fetch(request, self.results_tx.clone(), ctx.clone()) {
            Ok(_) => self.set_default_appearance(MSG_LOADING),
            Err(e) => {
                error!(error = %e, "Failed to start weather worker");
                self.search_state.finish(request_id, false);
                self.set_default_appearance(&FetchError::Connection.to_string());
            }
        }
    }

    /// Drain the result queue without blocking
    pub fn poll_results(&mut self, ctx: &egui::Context) {
        loop {
            match self.results_rx.try_recv() {
                Ok(result) => self.handle_result(ctx, result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if self.search_state.is_loading() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    fn handle_result(&mut self, ctx: &egui::Context, result: FetchResult) {
        if !self
            .search_state
            .finish(result.request_id, result.outcome.is_ok())
        {
            debug!(request_id = result.request_id, "Dropping superseded weather result");
            return;
        }
        debug!(request_id = result.request_id, phase = ?self.search_state.phase(), "Search finished");

        match result.outcome {
            Ok(info) => self.show_weather(ctx, info),
            Err(e) => {
                info!(error = %e, "Search failed");
                self.set_default_appearance(&e.to_string());
            }
        }
    }

    /// Default background with a message card and no glass panel
    pub fn set_default_appearance(&mut self, message: &str) {
        self.background_name = DEFAULT_BACKGROUND;
        self.screen = Screen::Message(message.to_string());
    }

    fn show_weather(&mut self, ctx: &egui::Context, info: WeatherInfo) {
        self.background_name = background_for(&info.conditions_main, &info.icon);
        info!(
            city = %info.city,
            conditions = %info.conditions_main,
            background = self.background_name,
            "Showing weather"
        );

        let icon = self.load_icon_texture(ctx, &info.icon);
        self.screen = Screen::Weather(Box::new(WeatherView {
            info,
            icon,
            temp_slide: SlideIn::new(TEMP_SLIDE.0, TEMP_SLIDE.1, TEMP_SLIDE_DELAY),
            conditions_slide: SlideIn::new(
                CONDITIONS_SLIDE.0,
                CONDITIONS_SLIDE.1,
                CONDITIONS_SLIDE_DELAY,
            ),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;
    use std::sync::mpsc::RecvTimeoutError;
    use std::time::Instant;

    /// App with no API key and no assets, so workers never touch the network
    fn app_without_key() -> App {
        App::from_parts(
            Settings::default(),
            std::env::temp_dir(),
            PathBuf::from("no-such-assets-dir"),
            None,
        )
    }

    fn message(app: &App) -> Option<&str> {
        match &app.screen {
            Screen::Message(text) => Some(text.as_str()),
            Screen::Weather(_) => None,
        }
    }

    /// Poll like the update loop does until the search settles
    fn poll_until_idle(app: &mut App, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while app.search_state.is_loading() && Instant::now() < deadline {
            app.poll_results(ctx);
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!app.search_state.is_loading(), "search never finished");
    }

    fn sunny() -> WeatherInfo {
        WeatherInfo {
            city: "Madrid".into(),
            conditions_desc: "Clear Sky".into(),
            conditions_main: "Clear".into(),
            temp: 28.4,
            feels_like: 27.9,
            humidity: 22,
            wind_speed: 3.1,
            icon: "01d".into(),
        }
    }

    #[test]
    fn test_blank_city_starts_no_worker() {
        let ctx = egui::Context::default();
        let mut app = app_without_key();
        app.city_query = "   ".into();

        app.search(&ctx);

        assert_eq!(message(&app), Some(MSG_EMPTY_CITY));
        assert!(!app.search_state.is_loading());
        assert_eq!(app.search_state.phase(), Phase::Error);
        assert_eq!(
            app.results_rx.recv_timeout(Duration::from_millis(200)).err(),
            Some(RecvTimeoutError::Timeout)
        );
    }

    #[test]
    fn test_search_shows_loading_then_error() {
        let ctx = egui::Context::default();
        let mut app = app_without_key();
        app.city_query = "  London ".into();

        app.search(&ctx);
        assert_eq!(message(&app), Some(MSG_LOADING));
        assert!(app.search_state.is_loading());
        assert_eq!(app.settings.last_city, "London");

        poll_until_idle(&mut app, &ctx);
        assert_eq!(message(&app), Some("API key not configured."));
        assert_eq!(app.search_state.phase(), Phase::Error);
        assert_eq!(app.background_name, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_back_to_back_searches_settle_on_latest() {
        let ctx = egui::Context::default();
        let mut app = app_without_key();

        app.city_query = "Oslo".into();
        app.search(&ctx);
        app.city_query = "Paris".into();
        app.search(&ctx);

        poll_until_idle(&mut app, &ctx);
        assert_eq!(message(&app), Some("API key not configured."));
        assert_eq!(app.search_state.phase(), Phase::Error);
    }

    #[test]
    fn test_superseded_result_leaves_screen_alone() {
        let ctx = egui::Context::default();
        let mut app = app_without_key();
        let stale = app.search_state.begin();
        let current = app.search_state.begin();
        app.set_default_appearance(MSG_LOADING);

        app.results_tx
            .send(FetchResult {
                request_id: stale,
                outcome: Err(FetchError::Status(500)),
            })
            .unwrap();
        app.poll_results(&ctx);
        assert_eq!(message(&app), Some(MSG_LOADING));
        assert!(app.search_state.is_loading());

        app.results_tx
            .send(FetchResult {
                request_id: current,
                outcome: Err(FetchError::CityNotFound("Atlantis".into())),
            })
            .unwrap();
        app.poll_results(&ctx);
        assert_eq!(message(&app), Some("City 'Atlantis' not found."));
        assert_eq!(app.search_state.phase(), Phase::Error);
    }

    #[test]
    fn test_success_switches_to_weather_screen() {
        let ctx = egui::Context::default();
        let mut app = app_without_key();
        let id = app.search_state.begin();

        app.results_tx
            .send(FetchResult {
                request_id: id,
                outcome: Ok(sunny()),
            })
            .unwrap();
        app.poll_results(&ctx);

        assert_eq!(app.search_state.phase(), Phase::Success);
        assert_eq!(app.background_name, "clear_day.png");
        match &app.screen {
            Screen::Weather(view) => {
                assert_eq!(view.info.city, "Madrid");
                assert!(view.icon.is_none());
            }
            Screen::Message(text) => panic!("expected weather screen, got message {:?}", text),
        }

        // A frame without any assets falls back to flat fills
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
        assert!(app.glass.is_none());
        assert_eq!(app.backdrop.as_ref().map(|b| b.name), Some("clear_day.png"));
    }

    #[test]
    fn test_idle_loading_success() {
        let mut state = SearchState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_loading());

        let id = state.begin();
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.is_loading());

        assert!(state.finish(id, true));
        assert_eq!(state.phase(), Phase::Success);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_result() {
        let mut state = SearchState::default();
        let id = state.begin();
        assert!(state.finish(id, false));
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let mut state = SearchState::default();
        let first = state.begin();
        let second = state.begin();
        assert_ne!(first, second);

        // The slow first request answers after the second was issued
        assert!(!state.finish(first, true));
        assert_eq!(state.phase(), Phase::Loading);

        assert!(state.finish(second, false));
        assert_eq!(state.phase(), Phase::Error);

        // A duplicate delivery is ignored too
        assert!(!state.finish(second, true));
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_reject_cancels_pending() {
        let mut state = SearchState::default();
        let id = state.begin();
        state.reject();
        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Error);
        assert!(!state.finish(id, true));
    }
}
