//! View rendering (background, glass panel, weather readout, search bar)

use super::{App, Screen, WeatherView};
use crate::constants::*;
use crate::theme;
use crate::ui::components::{detail_cell, detail_cells, format_temperature, shadowed_text};
use crate::ui::layout::{self, point_in, to_pixels};
use eframe::egui;

const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

impl App {
    pub fn render(&mut self, ctx: &egui::Context) {
        let window = ctx.screen_rect();
        let ppp = ctx.pixels_per_point();

        let window_px = to_pixels(window, window.min, ppp);
        self.ensure_background(ctx, [window_px[2], window_px[3]]);
        if matches!(self.screen, Screen::Weather(_)) {
            let panel = layout::GLASS_PANEL.rect_in(window);
            self.ensure_glass(ctx, to_pixels(panel, window.min, ppp));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BG_FALLBACK))
            .show(ctx, |ui| {
                self.paint_background(ui, window);
                match &self.screen {
                    Screen::Message(message) => paint_message_card(ui, window, message),
                    Screen::Weather(view) => self.paint_weather(ui, window, view),
                }
                self.render_search_bar(ui, window);
            });
    }

    fn paint_background(&self, ui: &egui::Ui, window: egui::Rect) {
        let texture = self.backdrop.as_ref().and_then(|b| b.texture.as_ref());
        match texture {
            Some(texture) => {
                ui.painter()
                    .image(texture.id(), window, FULL_UV, egui::Color32::WHITE);
            }
            None => {
                ui.painter().rect_filled(window, 0.0, theme::BG_FALLBACK);
            }
        }
    }

    fn paint_weather(&self, ui: &egui::Ui, window: egui::Rect, view: &WeatherView) {
        let painter = ui.painter();

        // Border, then the frosted panel on top of it
        let border = layout::GLASS_BORDER.rect_in(window);
        painter.rect_filled(border, theme::RADIUS_BORDER, theme::GLASS_BORDER);

        let panel = layout::GLASS_PANEL.rect_in(window);
        match &self.glass {
            Some(glass) => {
                egui::Image::from_texture(egui::load::SizedTexture::new(glass.texture.id(), panel.size()))
                    .corner_radius(theme::RADIUS_PANEL)
                    .paint_at(ui, panel);
            }
            None => {
                painter.rect_filled(panel, theme::RADIUS_PANEL, theme::BG_FALLBACK);
            }
        }

        // Children of the info frame are clipped to it, so the sliding
        // labels appear from its bottom edge
        let frame = layout::INFO_FRAME.rect_in(window);
        let clipped = painter.with_clip_rect(frame);

        let icon_center = point_in(frame, 0.5, layout::ICON_Y);
        match &view.icon {
            Some(icon) => {
                clipped.image(
                    icon.id(),
                    egui::Rect::from_center_size(icon_center, egui::Vec2::splat(ICON_SIZE)),
                    FULL_UV,
                    egui::Color32::WHITE,
                );
            }
            None => {
                shadowed_text(
                    &clipped,
                    icon_center,
                    "[Icon?]",
                    theme::FONT_ICON_FALLBACK,
                    theme::TEXT_MUTED,
                );
            }
        }

        shadowed_text(
            &clipped,
            point_in(frame, 0.5, view.temp_slide.position()),
            &format_temperature(view.info.temp),
            theme::FONT_TEMPERATURE,
            theme::TEXT_PRIMARY,
        );
        shadowed_text(
            &clipped,
            point_in(frame, 0.5, view.conditions_slide.position()),
            &view.info.conditions_desc,
            theme::FONT_CONDITIONS,
            theme::TEXT_PRIMARY,
        );
        shadowed_text(
            &clipped,
            point_in(frame, 0.5, layout::CITY_Y),
            &view.info.city,
            theme::FONT_CITY,
            theme::TEXT_SECONDARY,
        );

        let separator = layout::SEPARATOR.rect_in(frame);
        clipped.hline(
            separator.x_range(),
            separator.center().y,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::SEPARATOR),
        );

        let cells = detail_cells(&view.info, self.settings.units);
        let columns = cells.len() as f32;
        for (i, (heading, value)) in cells.iter().enumerate() {
            let center = point_in(frame, (i as f32 + 0.5) / columns, layout::DETAILS_Y);
            detail_cell(&clipped, center, heading, value);
        }
    }

    fn render_search_bar(&mut self, ui: &mut egui::Ui, window: egui::Rect) {
        let bar = layout::SEARCH_BAR.rect_in(window);
        let mut submitted = false;

        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(bar)
                .layout(egui::Layout::right_to_left(egui::Align::Center)),
            |ui| {
                let button = match &self.search_icon {
                    Some(icon) => egui::Button::image(egui::Image::from_texture(
                        egui::load::SizedTexture::new(
                            icon.id(),
                            egui::Vec2::splat(theme::SEARCH_ICON_SIZE),
                        ),
                    )),
                    None => egui::Button::new(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(theme::FONT_ENTRY)
                            .color(theme::TEXT_PRIMARY),
                    ),
                };
                let button = ui.add_sized(
                    [theme::SEARCH_BUTTON_WIDTH, bar.height()],
                    button.fill(theme::BG_INPUT),
                );
                if button.clicked() {
                    submitted = true;
                }

                let entry = ui.add_sized(
                    [ui.available_width(), bar.height()],
                    egui::TextEdit::singleline(&mut self.city_query)
                        .hint_text("Enter City...")
                        .font(egui::FontId::proportional(theme::FONT_ENTRY))
                        .text_color(theme::TEXT_PRIMARY)
                        .vertical_align(egui::Align::Center)
                        .margin(egui::Margin::symmetric(10, 5)),
                );
                if self.focus_search {
                    self.focus_search = false;
                    entry.request_focus();
                }
                if entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
            },
        );

        if submitted {
            self.search(ui.ctx());
        }
    }
}

/// Rounded card used for the prompt, loading and error messages
fn paint_message_card(ui: &egui::Ui, window: egui::Rect, message: &str) {
    let card = layout::MESSAGE_CARD.rect_in(window);
    let painter = ui.painter();
    painter.rect_filled(card, theme::RADIUS_PANEL, theme::BG_MESSAGE);

    let galley = painter.layout(
        message.to_owned(),
        egui::FontId::proportional(theme::FONT_MESSAGE),
        theme::TEXT_PRIMARY,
        theme::MESSAGE_WRAP_WIDTH,
    );
    let pos = card.center() - galley.size() / 2.0;
    painter.galley(pos, galley, theme::TEXT_PRIMARY);
}
