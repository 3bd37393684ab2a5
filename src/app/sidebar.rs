//! Navigation sidebar and service settings

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::types::Page;
use crate::utils;
use eframe::egui;
use egui_phosphor::regular as icons;

fn nav_icon(page: Page) -> &'static str {
    match page {
        Page::Home => icons::HOUSE,
        Page::Predict => icons::MAGIC_WAND,
        Page::AddComment => icons::PLUS_CIRCLE,
        Page::ViewComments => icons::CHAT_CIRCLE_TEXT,
    }
}

impl App {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_LG as i8, 0)),
            )
            .show(ctx, |ui| {
                ui.add_space(theme::SPACING_XXL);
                self.render_logo(ui, ctx);

                ui.add_space(theme::SPACING_XL);
                ui.label(
                    egui::RichText::new(format!("{}  NAVIGATION", icons::MAP_TRIFOLD))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.add_space(theme::SPACING_SM);

                for page in Page::ALL {
                    let selected = self.session.page() == page;
                    if theme::nav_item(ui, nav_icon(page), page.nav_label(), selected) {
                        self.session.navigate(page);
                    }
                }

                ui.add_space(theme::SPACING_XL);
                ui.separator();
                self.render_settings_section(ui);

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(theme::SPACING_LG);
                    ui.label(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                });
            });
    }

    fn render_logo(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            if self.logo_texture.is_none() {
                if let Some((pixels, w, h)) = utils::rasterize_logo(theme::LOGO_WIDTH as u32 * 2) {
                    self.logo_texture = Some(ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
            if let Some(texture) = &self.logo_texture {
                let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                let size = egui::vec2(theme::LOGO_WIDTH, theme::LOGO_WIDTH * aspect);
                ui.image(egui::load::SizedTexture::new(texture.id(), size));
            }
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new("SENTIMENT ANALYSIS")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
    }

    fn render_settings_section(&mut self, ui: &mut egui::Ui) {
        if theme::nav_item(ui, icons::GEAR, "Settings", self.show_settings) {
            self.show_settings = !self.show_settings;
        }
        if !self.show_settings {
            return;
        }

        ui.add_space(theme::SPACING_SM);
        ui.label(egui::RichText::new("API base URL").size(theme::FONT_SMALL).color(theme::TEXT_MUTED));
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.api_url_input)
                .hint_text(crate::constants::DEFAULT_API_URL)
                .desired_width(f32::INFINITY),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.horizontal(|ui| {
            if ui.add(theme::button("Apply")).clicked() || submitted {
                self.apply_api_url();
            }
            ui.label(
                egui::RichText::new(self.client.base_url())
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });

        if let Some(err) = &self.api_url_error {
            ui.label(egui::RichText::new(err).size(theme::FONT_SMALL).color(theme::STATUS_WARNING));
        }
    }
}
