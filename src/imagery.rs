//! Background selection, resizing and the frosted glass crop

use crate::constants::DEFAULT_BACKGROUND;
use eframe::egui;
use image::{imageops, RgbaImage};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// Icon codes end in `d` for day and `n` for night (e.g. `01d`, `10n`)
    pub fn from_icon(icon: &str) -> Self {
        if icon.ends_with('d') {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }
}

/// Background file for a condition group and time of day
pub fn background_for(conditions_main: &str, icon: &str) -> &'static str {
    use TimeOfDay::*;
    match (conditions_main, TimeOfDay::from_icon(icon)) {
        ("Clear", Day) => "clear_day.png",
        ("Clear", Night) => "clear_night.png",
        ("Clouds", Day) | ("Mist", Day) => "cloudy_day.png",
        ("Clouds", Night) | ("Mist", Night) => "cloudy_night.png",
        ("Rain", _) | ("Drizzle", _) => "rainy_day.png",
        ("Thunderstorm", _) => "stormy_day.png",
        ("Snow", Day) => "snowy_day.png",
        ("Snow", Night) => "snowy_night.png",
        _ => DEFAULT_BACKGROUND,
    }
}

/// Load a background and stretch it to exactly `size` pixels
pub fn load_background(path: &Path, size: [u32; 2]) -> Option<RgbaImage> {
    let [w, h] = size;
    if w <= 1 || h <= 1 {
        return None;
    }
    match image::open(path) {
        Ok(img) => Some(img.resize_exact(w, h, imageops::FilterType::CatmullRom).to_rgba8()),
        Err(e) => {
            debug!(error = %e, path = %path.display(), "Background unavailable");
            None
        }
    }
}

pub fn load_icon(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            debug!(error = %e, path = %path.display(), "Icon unavailable");
            None
        }
    }
}

/// Clamp `[x, y, w, h]` to an image of `dims`. None when nothing useful is left.
pub fn clamp_crop(rect: [u32; 4], dims: (u32, u32)) -> Option<[u32; 4]> {
    let (img_w, img_h) = dims;
    let x = rect[0].min(img_w);
    let y = rect[1].min(img_h);
    let w = rect[2].min(img_w - x);
    let h = rect[3].min(img_h - y);
    if w <= 1 || h <= 1 {
        None
    } else {
        Some([x, y, w, h])
    }
}

/// The part of the background under the glass panel, Gaussian blurred
pub fn frosted_crop(background: &RgbaImage, rect: [u32; 4], radius: f32) -> Option<RgbaImage> {
    let [x, y, w, h] = clamp_crop(rect, background.dimensions())?;
    let cropped = imageops::crop_imm(background, x, y, w, h).to_image();
    Some(imageops::blur(&cropped, radius))
}

pub fn to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}
