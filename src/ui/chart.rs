//! Donut chart for the sentiment split

use crate::theme;
use crate::types::SentimentCounts;
use eframe::egui;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Inner radius as a fraction of the outer radius
pub const HOLE_RATIO: f32 = 0.3;

/// Angular step used when tessellating a slice
const SEGMENT_STEP: f32 = TAU / 180.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: usize,
    pub fraction: f32,
    /// Radians, measured clockwise from 12 o'clock
    pub start: f32,
    pub sweep: f32,
    pub color: egui::Color32,
}

/// Positive first, then negative, laid out clockwise from the top.
pub fn slices(counts: &SentimentCounts) -> [Slice; 2] {
    let total = counts.total();
    let fraction = |value: usize| {
        if total == 0 {
            0.0
        } else {
            value as f32 / total as f32
        }
    };
    let positive = fraction(counts.positive);
    let negative = fraction(counts.negative);
    [
        Slice {
            label: "positive",
            value: counts.positive,
            fraction: positive,
            start: 0.0,
            sweep: positive * TAU,
            color: theme::CHART_POSITIVE,
        },
        Slice {
            label: "negative",
            value: counts.negative,
            fraction: negative,
            start: positive * TAU,
            sweep: negative * TAU,
            color: theme::CHART_NEGATIVE,
        },
    ]
}

fn point_at(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    // Clockwise from the top in screen space (y grows downward)
    let a = angle - FRAC_PI_2;
    center + egui::vec2(a.cos(), a.sin()) * radius
}

/// Paint the ring and legend. Allocates `size` square for the ring.
pub fn donut(ui: &mut egui::Ui, counts: &SentimentCounts, size: f32) {
    let parts = slices(counts);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let outer = size / 2.0 - theme::SPACING_SM;
            let inner = outer * HOLE_RATIO;

            if counts.total() == 0 {
                painter.circle_stroke(center, outer, egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT));
                painter.circle_stroke(center, inner, egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT));
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "No data",
                    egui::FontId::proportional(theme::FONT_SMALL),
                    theme::TEXT_DIM,
                );
            }

            for slice in parts.iter().filter(|s| s.sweep > 0.0) {
                let steps = (slice.sweep / SEGMENT_STEP).ceil().max(1.0) as usize;
                let step = slice.sweep / steps as f32;
                for i in 0..steps {
                    let a0 = slice.start + step * i as f32;
                    let a1 = a0 + step;
                    painter.add(egui::Shape::convex_polygon(
                        vec![
                            point_at(center, outer, a0),
                            point_at(center, outer, a1),
                            point_at(center, inner, a1),
                            point_at(center, inner, a0),
                        ],
                        slice.color,
                        egui::Stroke::NONE,
                    ));
                }
            }
        }

        ui.add_space(theme::SPACING_XL);
        ui.vertical(|ui| {
            ui.add_space(size / 2.0 - 2.0 * theme::FONT_BODY);
            for slice in &parts {
                legend_row(ui, slice);
            }
        });
    });
}

fn legend_row(ui: &mut egui::Ui, slice: &Slice) {
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, theme::RADIUS_SMALL, slice.color);
        ui.label(
            egui::RichText::new(format!(
                "{}: {} ({:.1}%)",
                slice.label,
                slice.value,
                slice.fraction * 100.0
            ))
            .size(theme::FONT_BODY)
            .color(theme::TEXT_SECONDARY),
        );
    });
}
