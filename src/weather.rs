//! Weather API access - one blocking GET per search, run off the UI thread

use crate::constants::*;
use crate::types::*;
use crate::utils::title_case;
use eframe::egui;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

/// Build the current-weather URL. The city is form-encoded into the query.
pub fn build_request_url(
    base: &str,
    city: &str,
    api_key: &str,
    units: Units,
) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse_with_params(
        base,
        &[("q", city), ("appid", api_key), ("units", units.as_query())],
    )
    .map_err(|e| {
        warn!(error = %e, base, "Failed to build request URL");
        FetchError::Connection
    })
}

/// Map an HTTP status and body onto the outcome shown to the user
pub fn interpret_response(status: u16, body: &str, city: &str) -> Result<WeatherInfo, FetchError> {
    match status {
        200 => parse_weather(body),
        404 => Err(FetchError::CityNotFound(city.to_string())),
        code => Err(FetchError::Status(code)),
    }
}

/// Decode a successful response body
pub fn parse_weather(body: &str) -> Result<WeatherInfo, FetchError> {
    let response: CurrentWeatherResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "Failed to decode weather response");
        FetchError::Decode
    })?;

    let Some(condition) = response.weather.into_iter().next() else {
        warn!("Weather response has no condition entries");
        return Err(FetchError::Decode);
    };

    Ok(WeatherInfo {
        city: response.name,
        conditions_desc: title_case(&condition.description),
        conditions_main: condition.main,
        temp: response.main.temp,
        feels_like: response.main.feels_like,
        humidity: response.main.humidity,
        wind_speed: response.wind.speed,
        icon: condition.icon,
    })
}

/// Perform one blocking request against the API
pub fn fetch_weather(
    client: &reqwest::blocking::Client,
    base: &str,
    city: &str,
    api_key: Option<&str>,
    units: Units,
) -> Result<WeatherInfo, FetchError> {
    let api_key = api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(FetchError::MissingApiKey)?;

    let url = build_request_url(base, city, api_key, units)?;

    let response = client.get(url).send().map_err(|e| {
        warn!(error = %e, city = %city, "Weather request failed");
        FetchError::Connection
    })?;

    let status = response.status().as_u16();
    debug!(status, city = %city, "Weather response received");

    let body = response.text().map_err(|e| {
        warn!(error = %e, "Failed to read weather response body");
        FetchError::Connection
    })?;

    interpret_response(status, &body, city)
}

fn build_client() -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(format!("glass-weather/{}", APP_VERSION))
        .build()
        .map_err(|e| {
            warn!(error = %e, "Failed to build HTTP client");
            FetchError::Connection
        })
}

/// Start the worker thread for one search. Exactly one `FetchResult` is sent.
pub fn spawn_fetch(
    request: FetchRequest,
    results: Sender<FetchResult>,
    ctx: egui::Context,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("weather-fetch".into())
        .spawn(move || {
            info!(request_id = request.request_id, city = %request.city, "Fetching weather");

            let outcome = build_client().and_then(|client| {
                fetch_weather(
                    &client,
                    CURRENT_WEATHER_URL,
                    &request.city,
                    request.api_key.as_deref(),
                    request.units,
                )
            });

            match &outcome {
                Ok(info) => debug!(city = %info.city, icon = %info.icon, "Weather fetched"),
                Err(e) => debug!(error = %e, "Weather fetch failed"),
            }

            // Receiver is gone only when the window has closed
            if results
                .send(FetchResult {
                    request_id: request.request_id,
                    outcome,
                })
                .is_err()
            {
                debug!("Result queue closed, dropping weather result");
            }
            ctx.request_repaint();
        })
}
