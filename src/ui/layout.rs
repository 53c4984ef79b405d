//! Relative placement, expressed as fractions of a parent rectangle

use eframe::egui;

/// Placement of a child centred at (`relx`, `rely`) of its parent with a
/// size of (`relw`, `relh`) of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub relx: f32,
    pub rely: f32,
    pub relw: f32,
    pub relh: f32,
}

impl Place {
    pub const fn new(relx: f32, rely: f32, relw: f32, relh: f32) -> Self {
        Self { relx, rely, relw, relh }
    }

    pub fn center_in(&self, parent: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            parent.left() + parent.width() * self.relx,
            parent.top() + parent.height() * self.rely,
        )
    }

    pub fn rect_in(&self, parent: egui::Rect) -> egui::Rect {
        egui::Rect::from_center_size(
            self.center_in(parent),
            egui::vec2(parent.width() * self.relw, parent.height() * self.relh),
        )
    }
}

pub const SEARCH_BAR: Place = Place::new(0.5, 0.1, 0.85, 0.07);
pub const MESSAGE_CARD: Place = Place::new(0.5, 0.55, 0.9, 0.8);
pub const GLASS_BORDER: Place = Place::new(0.5, 0.55, 0.9, 0.8);
pub const GLASS_PANEL: Place = Place::new(0.5, 0.55, 0.88, 0.78);
pub const INFO_FRAME: Place = Place::new(0.5, 0.55, 0.8, 0.7);

// Inside the info frame
pub const ICON_Y: f32 = 0.22;
pub const CITY_Y: f32 = 0.65;
pub const SEPARATOR: Place = Place::new(0.5, 0.75, 0.8, 0.0);
pub const DETAILS_Y: f32 = 0.86;

pub const TEMP_SLIDE: (f32, f32) = (1.2, 0.45);
pub const CONDITIONS_SLIDE: (f32, f32) = (1.3, 0.55);

/// Point at (`relx`, `rely`) of `parent`
pub fn point_in(parent: egui::Rect, relx: f32, rely: f32) -> egui::Pos2 {
    Place::new(relx, rely, 0.0, 0.0).center_in(parent)
}

/// Convert a rect in points to whole pixels relative to `origin`: `[x, y, w, h]`
pub fn to_pixels(rect: egui::Rect, origin: egui::Pos2, pixels_per_point: f32) -> [u32; 4] {
    let x = ((rect.left() - origin.x) * pixels_per_point).round().max(0.0);
    let y = ((rect.top() - origin.y) * pixels_per_point).round().max(0.0);
    let w = (rect.width() * pixels_per_point).round().max(0.0);
    let h = (rect.height() * pixels_per_point).round().max(0.0);
    [x as u32, y as u32, w as u32, h as u32]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 600.0))
    }

    #[test]
    fn test_glass_panel_geometry() {
        let rect = GLASS_PANEL.rect_in(window());
        assert!((rect.center() - egui::pos2(200.0, 330.0)).length() < 1e-3);
        assert!((rect.width() - 352.0).abs() < 1e-3);
        assert!((rect.height() - 468.0).abs() < 1e-3);
    }

    #[test]
    fn test_offset_parent() {
        let parent = egui::Rect::from_min_size(egui::pos2(40.0, 120.0), egui::vec2(320.0, 420.0));
        assert_eq!(point_in(parent, 0.5, 0.5), egui::pos2(200.0, 330.0));
        assert_eq!(point_in(parent, 0.0, 1.0), egui::pos2(40.0, 540.0));
    }

    #[test]
    fn test_to_pixels_scales_and_offsets() {
        let rect = egui::Rect::from_min_size(egui::pos2(24.0, 96.0), egui::vec2(352.0, 468.0));
        assert_eq!(to_pixels(rect, egui::Pos2::ZERO, 1.0), [24, 96, 352, 468]);
        assert_eq!(to_pixels(rect, egui::Pos2::ZERO, 2.0), [48, 192, 704, 936]);
        assert_eq!(to_pixels(rect, egui::pos2(30.0, 0.0), 1.0), [0, 96, 352, 468]);
    }
}
