//! Background and glass panel textures

use super::App;
use crate::constants::*;
use crate::imagery::{frosted_crop, load_background, load_icon, to_color_image};
use crate::utils::{background_path, icon_path};
use eframe::egui;
use image::RgbaImage;
use tracing::{debug, warn};

/// Current background, resized to the window in pixels
pub(crate) struct Backdrop {
    pub(crate) name: &'static str,
    pub(crate) size: [u32; 2],
    pub(crate) image: Option<RgbaImage>,
    pub(crate) texture: Option<egui::TextureHandle>,
}

/// Blurred crop of the backdrop under the glass panel
pub(crate) struct GlassPane {
    pub(crate) background: &'static str,
    pub(crate) rect: [u32; 4],
    pub(crate) texture: egui::TextureHandle,
}

impl App {
    /// Reload the background when its name or the window size changed
    pub fn ensure_background(&mut self, ctx: &egui::Context, size: [u32; 2]) {
        if let Some(current) = &self.backdrop {
            if current.name == self.background_name && current.size == size {
                return;
            }
        }

        let name = self.background_name;
        let path = background_path(&self.assets_dir, name);
        let image = load_background(&path, size);
        if image.is_none() {
            warn!(path = %path.display(), "Background missing, using flat fill");
        }

        let texture = image.as_ref().map(|img| {
            ctx.load_texture(
                format!("background_{}", name),
                to_color_image(img),
                egui::TextureOptions::LINEAR,
            )
        });

        debug!(background = name, width = size[0], height = size[1], "Background updated");
        self.backdrop = Some(Backdrop {
            name,
            size,
            image,
            texture,
        });
        self.glass = None;
    }

    /// Rebuild the frosted crop when the background or panel rect changed
    pub fn ensure_glass(&mut self, ctx: &egui::Context, rect: [u32; 4]) {
        let Some(backdrop) = &self.backdrop else {
            self.glass = None;
            return;
        };
        let Some(background) = &backdrop.image else {
            self.glass = None;
            return;
        };
        if let Some(glass) = &self.glass {
            if glass.background == backdrop.name && glass.rect == rect {
                return;
            }
        }

        self.glass = frosted_crop(background, rect, GLASS_BLUR_RADIUS).map(|blurred| {
            debug!(background = backdrop.name, ?rect, "Glass panel rebuilt");
            GlassPane {
                background: backdrop.name,
                rect,
                texture: ctx.load_texture(
                    "glass_panel",
                    to_color_image(&blurred),
                    egui::TextureOptions::LINEAR,
                ),
            }
        });
    }

    pub fn load_icon_texture(&self, ctx: &egui::Context, icon_code: &str) -> Option<egui::TextureHandle> {
        let path = icon_path(&self.assets_dir, icon_code);
        load_icon(&path).map(|img| {
            ctx.load_texture(
                format!("icon_{}", icon_code),
                to_color_image(&img),
                egui::TextureOptions::LINEAR,
            )
        })
    }
}
