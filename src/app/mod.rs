//! App module - contains the main application state and logic

mod backdrop;
mod search;
mod views;

use search::SearchState;

use crate::constants::*;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::ui::animation::SlideIn;
use crate::utils::resolve_assets_dir;
use backdrop::{Backdrop, GlassPane};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

/// What fills the glass area below the search bar
pub(crate) enum Screen {
    /// Prompt, loading and error text on the default background
    Message(String),
    Weather(Box<WeatherView>),
}

pub(crate) struct WeatherView {
    pub(crate) info: WeatherInfo,
    pub(crate) icon: Option<egui::TextureHandle>,
    pub(crate) temp_slide: SlideIn,
    pub(crate) conditions_slide: SlideIn,
}

pub struct App {
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) assets_dir: PathBuf,
    pub(crate) api_key: Option<String>,
    // Search
    pub(crate) city_query: String,
    pub(crate) focus_search: bool,
    pub(crate) search_state: SearchState,
    pub(crate) results_tx: Sender<FetchResult>,
    pub(crate) results_rx: Receiver<FetchResult>,
    // View
    pub(crate) screen: Screen,
    pub(crate) background_name: &'static str,
    pub(crate) backdrop: Option<Backdrop>,
    pub(crate) glass: Option<GlassPane>,
    pub(crate) search_icon: Option<egui::TextureHandle>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor glyph stands in when icons/search.png is missing
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let assets_dir = resolve_assets_dir(settings.assets_path.as_deref());
        info!(path = %assets_dir.display(), "Using assets directory");

        let api_key = settings.resolve_api_key();
        if api_key.is_none() {
            warn!(env = API_KEY_ENV, "No API key configured, searches will fail");
        }

        let mut app = Self::from_parts(settings, data_dir, assets_dir, api_key);
        app.focus_search = true;
        app.search_icon = app.load_icon_texture(&cc.egui_ctx, "search");
        app
    }

    /// State without any window or texture setup
    pub(crate) fn from_parts(
        settings: Settings,
        data_dir: PathBuf,
        assets_dir: PathBuf,
        api_key: Option<String>,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::channel();

        Self {
            city_query: settings.last_city.clone(),
            settings,
            data_dir,
            assets_dir,
            api_key,
            focus_search: false,
            search_state: SearchState::default(),
            results_tx,
            results_rx,
            screen: Screen::Message(MSG_SEARCH_PROMPT.to_string()),
            background_name: DEFAULT_BACKGROUND,
            backdrop: None,
            glass: None,
            search_icon: None,
            window_pos: None,
        }
    }

    pub fn save_settings(&self) {
        let mut settings = self.settings.clone();
        if let Some(pos) = self.window_pos {
            settings.window_x = Some(pos.x);
            settings.window_y = Some(pos.y);
        }
        settings.save(&self.data_dir);
    }

    /// True while a slide-in is still moving
    pub fn is_animating(&self) -> bool {
        match &self.screen {
            Screen::Weather(view) => {
                !view.temp_slide.is_finished() || !view.conditions_slide.is_finished()
            }
            Screen::Message(_) => false,
        }
    }
}
