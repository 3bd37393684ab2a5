//! Reusable UI components
//!
//! Banners, the predicted-label display and comment cards. Each widget takes
//! plain data so views stay thin.

use crate::theme;
use crate::types::*;
use eframe::egui;

/// Colored banner for success, warning and error messages
pub fn notice(ui: &mut egui::Ui, notice: &Notice) {
    let icon = match notice.kind {
        NoticeKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
        NoticeKind::Warning => egui_phosphor::regular::WARNING,
        NoticeKind::Error => egui_phosphor::regular::WARNING_OCTAGON,
    };
    let color = theme::notice_color(notice.kind);
    theme::notice_frame(notice.kind).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(icon).size(theme::FONT_HEADING).color(color));
            ui.label(egui::RichText::new(&notice.message).size(theme::FONT_BODY).color(theme::TEXT_SECONDARY));
        });
    });
}

/// Text of the large label shown after a prediction
pub fn prediction_text(label: &Sentiment) -> String {
    match label {
        Sentiment::Unknown(_) => format!("{} {}", label.display_label(), label.emoji()),
        _ => format!("{} 💬", label.display_label()),
    }
}

/// Large centered label, colored by sentiment
pub fn prediction(ui: &mut egui::Ui, label: &Sentiment) {
    ui.add_space(theme::SPACING_XL);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(prediction_text(label))
                .size(theme::FONT_DISPLAY)
                .strong()
                .color(theme::prediction_color(label)),
        );
    });
}

/// One stored comment, filled with its label's color
pub fn comment_card(ui: &mut egui::Ui, comment: &Comment) {
    let (fill, text) = theme::sentiment_colors(&comment.prediction);
    let field = |ui: &mut egui::Ui, name: &str, value: &str| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            ui.label(egui::RichText::new(name).strong().color(text));
            ui.label(egui::RichText::new(value).color(text));
        });
    };

    theme::comment_card_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            field(
                ui,
                "Commenter Name:",
                &format!("{} {}", comment.commenter_name, comment.prediction.emoji()),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(comment.prediction.display_label()).color(text));
                ui.label(egui::RichText::new("Sentiment:").strong().color(text));
            });
        });
        ui.add_space(theme::SPACING_SM);
        field(ui, "Comment:", &comment.comment_text);
        ui.add_space(theme::SPACING_SM);
        field(ui, "Date:", &comment.creation_time);
    });
    ui.add_space(theme::SPACING_MD);
}

/// Page heading with icon
pub fn page_title(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.add_space(theme::SPACING_XXL);
    ui.label(
        egui::RichText::new(format!("{}  {}", icon, title))
            .size(theme::FONT_TITLE)
            .strong()
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(theme::SPACING_LG);
}

/// Field caption above an input
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(theme::FONT_LABEL).color(theme::TEXT_MUTED));
}
