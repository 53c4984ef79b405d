//! Reusable UI components
//!
//! Text formatting for the weather readout plus small painting helpers
//! used by the views.

use crate::theme;
use crate::types::{Units, WeatherInfo};
use eframe::egui;

pub fn format_temperature(temp: f64) -> String {
    format!("{:.0}°", temp)
}

/// (heading, value) pairs for the details row
pub fn detail_cells(info: &WeatherInfo, units: Units) -> [(&'static str, String); 3] {
    [
        ("Feels Like", format_temperature(info.feels_like)),
        ("Humidity", format!("{}%", info.humidity)),
        ("Wind", format!("{:.1} {}", info.wind_speed, units.wind_unit())),
    ]
}

/// Text with a soft drop shadow so it stays readable over busy backgrounds
pub fn shadowed_text(
    painter: &egui::Painter,
    pos: egui::Pos2,
    text: &str,
    size: f32,
    color: egui::Color32,
) -> egui::Rect {
    let font = egui::FontId::proportional(size);
    painter.text(
        pos + egui::vec2(1.0, 1.5),
        egui::Align2::CENTER_CENTER,
        text,
        font.clone(),
        theme::TEXT_SHADOW,
    );
    painter.text(pos, egui::Align2::CENTER_CENTER, text, font, color)
}

/// Two centred lines: a small heading over its value
pub fn detail_cell(painter: &egui::Painter, center: egui::Pos2, heading: &str, value: &str) {
    let line = theme::FONT_DETAIL * 1.3;
    shadowed_text(
        painter,
        center - egui::vec2(0.0, line / 2.0),
        heading,
        theme::FONT_DETAIL,
        theme::TEXT_SECONDARY,
    );
    shadowed_text(
        painter,
        center + egui::vec2(0.0, line / 2.0),
        value,
        theme::FONT_DETAIL,
        theme::TEXT_PRIMARY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherInfo {
        WeatherInfo {
            city: "Reykjavik".into(),
            conditions_desc: "Light Snow".into(),
            conditions_main: "Snow".into(),
            temp: -3.6,
            feels_like: -9.2,
            humidity: 93,
            wind_speed: 7.25,
            icon: "13n".into(),
        }
    }

    #[test]
    fn test_format_temperature_rounds() {
        assert_eq!(format_temperature(21.6), "22°");
        assert_eq!(format_temperature(-3.6), "-4°");
        assert_eq!(format_temperature(0.0), "0°");
    }

    #[test]
    fn test_detail_cells_metric() {
        let cells = detail_cells(&sample(), Units::Metric);
        assert_eq!(cells[0], ("Feels Like", "-9°".to_string()));
        assert_eq!(cells[1], ("Humidity", "93%".to_string()));
        assert_eq!(cells[2].0, "Wind");
        assert!(cells[2].1 == "7.2 m/s" || cells[2].1 == "7.3 m/s");
    }

    #[test]
    fn test_detail_cells_imperial_wind_unit() {
        let mut info = sample();
        info.wind_speed = 12.0;
        let cells = detail_cells(&info, Units::Imperial);
        assert_eq!(cells[2].1, "12.0 mph");
    }
}
