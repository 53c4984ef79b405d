//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Unit system passed to the API as `units=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_query(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn wind_unit(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

/// Weather for one city, flattened from the API response
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherInfo {
    pub city: String,
    pub conditions_desc: String,
    pub conditions_main: String,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub wind_speed: f64,
    pub icon: String,
}

/// Failure modes of a single search, displayed verbatim to the user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("API key not configured.")]
    MissingApiKey,
    #[error("City '{0}' not found.")]
    CityNotFound(String),
    #[error("API Error (Code: {0}).")]
    Status(u16),
    #[error("Connection error.")]
    Connection,
    #[error("Unexpected response from weather service.")]
    Decode,
}

/// Message pushed by the worker thread onto the result queue
#[derive(Debug)]
pub struct FetchResult {
    pub request_id: u64,
    pub outcome: Result<WeatherInfo, FetchError>,
}

/// What a worker thread needs to perform one search
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub request_id: u64,
    pub city: String,
    pub api_key: Option<String>,
    pub units: Units,
}

/// Current weather response from remote JSON
#[derive(Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    pub wind: WindReadings,
}

#[derive(Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Deserialize)]
pub struct WindReadings {
    pub speed: f64,
}
