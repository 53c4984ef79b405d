//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Glass Weather App";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DATA_DIR_NAME: &str = "Glass Weather";

pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const ASSETS_ENV: &str = "GLASS_WEATHER_ASSETS";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How often the UI checks the result queue while a search is in flight
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub const WINDOW_WIDTH: f32 = 400.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

pub const DEFAULT_BACKGROUND: &str = "default.png";
pub const GLASS_BLUR_RADIUS: f32 = 15.0;
pub const ICON_SIZE: f32 = 120.0;

pub const MSG_SEARCH_PROMPT: &str = "Search for a city";
pub const MSG_EMPTY_CITY: &str = "Please enter a city name.";
pub const MSG_LOADING: &str = "Loading...";
