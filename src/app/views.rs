//! View rendering (home, predict, add comment, view comments)

use super::session::{ListOutcome, PredictOutcome};
use super::App;
use crate::theme;
use crate::types::Page;
use crate::ui::{chart, components};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                match self.session.page() {
                    Page::Home => render_home(ui),
                    Page::Predict => self.render_predict(ui, ctx),
                    Page::AddComment => self.render_add_comment(ui, ctx),
                    Page::ViewComments => self.render_comments(ui, ctx),
                }
                ui.add_space(theme::SPACING_XXL);
            });
    }

    fn render_predict(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        components::page_title(ui, icons::MAGIC_WAND, "Predict Sentiment");

        let form = &mut self.session.predict;
        let mut request = None;
        theme::section_frame().show(ui, |ui| {
            components::field_label(ui, "Enter a comment for sentiment analysis:");
            ui.add(
                egui::TextEdit::multiline(&mut form.text)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let button = theme::button_accent(format!("{}  Predict", icons::MAGNIFYING_GLASS));
                if ui.add_enabled(!form.pending, button).clicked() {
                    request = form.submit();
                }
                if form.pending {
                    ui.spinner();
                }
            });
        });

        match &form.outcome {
            Some(PredictOutcome::Label(label)) => components::prediction(ui, label),
            Some(PredictOutcome::Notice(notice)) => {
                ui.add_space(theme::SPACING_LG);
                components::notice(ui, notice);
            }
            None => {}
        }
        form.shown |= form.outcome.is_some();

        self.dispatch(request, ctx);
    }

    fn render_add_comment(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        components::page_title(ui, icons::PLUS_CIRCLE, "Add Comment to Database");

        let form = &mut self.session.add_comment;
        let mut request = None;
        theme::section_frame().show(ui, |ui| {
            components::field_label(ui, "Enter a comment to add to the database:");
            ui.add(
                egui::TextEdit::multiline(&mut form.comment_text)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(theme::SPACING_SM);
            components::field_label(ui, "Enter your name:");
            ui.add(egui::TextEdit::singleline(&mut form.commenter_name).desired_width(f32::INFINITY));
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let button = theme::button_accent(format!("{}  Add Comment", icons::PAPER_PLANE_RIGHT));
                if ui.add_enabled(!form.pending, button).clicked() {
                    request = form.submit();
                }
                if form.pending {
                    ui.spinner();
                }
            });
        });

        if let Some(notice) = &form.notice {
            ui.add_space(theme::SPACING_LG);
            components::notice(ui, notice);
        }
        form.shown |= form.notice.is_some();

        self.dispatch(request, ctx);
    }

    fn render_comments(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        components::page_title(ui, icons::CHAT_CIRCLE_TEXT, "View Comments from Database");

        let view = &mut self.session.comments;
        let mut request = None;
        ui.horizontal(|ui| {
            let button = theme::button_accent(format!("{}  Retrieve Comments", icons::DOWNLOAD_SIMPLE));
            if ui.add_enabled(!view.pending, button).clicked() {
                request = view.retrieve();
            }
            if view.pending {
                ui.spinner();
            }
        });
        ui.add_space(theme::SPACING_LG);

        match &view.outcome {
            Some(ListOutcome::Loaded(listing)) => {
                theme::section_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(format!("{}  Sentiment Distribution", icons::CHART_PIE))
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(theme::SPACING_MD);
                    chart::donut(ui, &listing.counts, theme::CHART_SIZE);
                });

                ui.add_space(theme::SPACING_XL);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}  Comments", icons::CHATS))
                            .size(theme::FONT_HEADING)
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} retrieved at {}",
                            listing.comments.len(),
                            listing.fetched_at.format("%H:%M:%S")
                        ))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                    );
                });
                ui.add_space(theme::SPACING_MD);
                for comment in &listing.comments {
                    components::comment_card(ui, comment);
                }
            }
            Some(ListOutcome::Failed(notice)) => components::notice(ui, notice),
            None => {}
        }
        view.shown |= view.outcome.is_some();

        self.dispatch(request, ctx);
    }
}

fn render_home(ui: &mut egui::Ui) {
    components::page_title(ui, icons::SPARKLE, "Sentiment Analysis System");

    let body = |ui: &mut egui::Ui, text: &str| {
        ui.label(egui::RichText::new(text).size(theme::FONT_BODY).color(theme::TEXT_SECONDARY));
    };

    body(ui, "Welcome to our Sentiment Analysis System! This application allows you to:");
    ui.add_space(theme::SPACING_XS);
    for (icon, text) in [
        (icons::MAGIC_WAND, "Predict the sentiment of a given comment (positive or negative)"),
        (icons::PLUS_CIRCLE, "Add a new comment to the database"),
        (icons::CHAT_CIRCLE_TEXT, "View all comments in the database along with their sentiment distribution"),
    ] {
        ui.horizontal(|ui| {
            ui.add_space(theme::SPACING_MD);
            ui.label(egui::RichText::new(icon).color(theme::ACCENT));
            body(ui, text);
        });
    }
    ui.add_space(theme::SPACING_MD);
    body(ui, "To get started, please select an option from the navigation sidebar.");
}
