//! Centralized theme constants for Glass Weather
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_FALLBACK: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b); // shown when a background image is missing
pub const BG_INPUT: Color32 = Color32::from_rgb(0x40, 0x40, 0x40); // gray25
pub const BG_INPUT_HOVER: Color32 = Color32::from_rgb(0x59, 0x59, 0x59); // gray35
pub const BG_MESSAGE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33); // gray20

// =============================================================================
// COLORS - Glass
// =============================================================================
pub const GLASS_BORDER: Color32 = Color32::from_rgb(0x4a, 0x4a, 0x4a);
pub const SEPARATOR: Color32 = Color32::from_rgb(0xbe, 0xbe, 0xbe); // gray

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xdc, 0xe4, 0xee);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_SHADOW: Color32 = Color32::from_black_alpha(90);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TEMPERATURE: f32 = 64.0;
pub const FONT_CONDITIONS: f32 = 24.0;
pub const FONT_CITY: f32 = 18.0;
pub const FONT_MESSAGE: f32 = 18.0;
pub const FONT_ENTRY: f32 = 18.0;
pub const FONT_DETAIL: f32 = 14.0;
pub const FONT_ICON_FALLBACK: f32 = 16.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const SEARCH_BUTTON_WIDTH: f32 = 40.0;
pub const SEARCH_ICON_SIZE: f32 = 20.0;
pub const SEARCH_GAP: f32 = 10.0;
pub const MESSAGE_WRAP_WIDTH: f32 = 300.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_PANEL: f32 = 20.0;
pub const RADIUS_BORDER: f32 = 22.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_FALLBACK,
        extreme_bg_color: BG_INPUT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT_HOVER,
                weak_bg_fill: BG_INPUT_HOVER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT_HOVER,
                weak_bg_fill: BG_INPUT_HOVER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SEARCH_GAP, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 6.0);
    });
}
