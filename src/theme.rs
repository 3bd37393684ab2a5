//! Centralized theme constants for Sentiment Dashboard
//! All colors, sizes, and styling should reference these constants

use crate::types::{NoticeKind, Sentiment};
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800

// =============================================================================
// COLORS - Accent (Violet)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xa7, 0x8b, 0xfa); // violet-400
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x2e, 0x10, 0x65); // violet-950, text on accent
pub const NAV_SELECTED: Color32 = Color32::from_rgb(0x23, 0x1a, 0x3d);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Sentiment
// =============================================================================
// Named CSS colors used for prediction text and comment cards
pub const SENTIMENT_POSITIVE: Color32 = Color32::from_rgb(0x00, 0x80, 0x00); // green
pub const SENTIMENT_NEGATIVE: Color32 = Color32::from_rgb(0xff, 0x00, 0x00); // red
pub const SENTIMENT_NEUTRAL: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3); // lightgrey

// Chart slices
pub const CHART_POSITIVE: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
pub const CHART_NEGATIVE: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36);

/// Returns (card background, card text) for a comment's label
pub fn sentiment_colors(sentiment: &Sentiment) -> (Color32, Color32) {
    match sentiment {
        Sentiment::Positive => (SENTIMENT_POSITIVE, TEXT_PRIMARY),
        Sentiment::Negative => (SENTIMENT_NEGATIVE, TEXT_PRIMARY),
        Sentiment::Unknown(_) => (SENTIMENT_NEUTRAL, Color32::from_rgb(0x18, 0x18, 0x1b)),
    }
}

/// Color of the large label on the predict view
pub fn prediction_color(sentiment: &Sentiment) -> Color32 {
    sentiment_colors(sentiment).0
}

pub fn notice_color(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Success => STATUS_SUCCESS,
        NoticeKind::Warning => STATUS_WARNING,
        NoticeKind::Error => STATUS_ERROR,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 24.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const CONTENT_MAX_WIDTH: f32 = 760.0;
pub const NAV_ITEM_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const CHART_SIZE: f32 = 240.0;
pub const LOGO_WIDTH: f32 = 56.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_CARD: f32 = 5.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32, weak_bg_fill: Color32, stroke: egui::Stroke, fg: Color32| {
        egui::style::WidgetVisuals {
            bg_fill,
            weak_bg_fill,
            bg_stroke: stroke,
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion: 0.0,
        }
    };
    let subtle = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, BG_SURFACE, subtle, TEXT_PRIMARY),
            inactive: widget(BG_SURFACE, BG_SURFACE, subtle, TEXT_SECONDARY),
            hovered: widget(
                lighten(BG_SURFACE, 0.08),
                lighten(BG_SURFACE, 0.08),
                egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                TEXT_PRIMARY,
            ),
            active: widget(BG_ELEVATED, BG_ELEVATED, egui::Stroke::NONE, TEXT_PRIMARY),
            open: widget(BG_SURFACE, BG_ELEVATED, subtle, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Bordered section around a form or chart
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Comment card filled with the label's color
pub fn comment_card_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(10))
}

/// Banner with a tinted background and a colored left edge
pub fn notice_frame(kind: NoticeKind) -> egui::Frame {
    let color = notice_color(kind);
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 24))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent button for the primary action of a view
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_DARK))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BG_SURFACE)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Full-width sidebar entry with icon. Returns true if clicked.
pub fn nav_item(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> bool {
    let w = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, NAV_ITEM_HEIGHT), egui::Sense::click());
    let base = if selected { NAV_SELECTED } else { BG_BASE };
    let (fill, draw_rect) = button_visual(&response, base, rect);
    let painter = ui.painter();
    painter.rect_filled(draw_rect, RADIUS_DEFAULT, fill);
    if selected {
        let bar = egui::Rect::from_min_size(draw_rect.min, egui::vec2(3.0, draw_rect.height()));
        painter.rect_filled(bar, RADIUS_SMALL, ACCENT);
    }
    painter.text(
        draw_rect.left_center() + egui::vec2(SPACING_LG, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{}  {}", icon, label),
        egui::FontId::proportional(FONT_BODY),
        if selected { TEXT_PRIMARY } else { TEXT_MUTED },
    );
    response.clicked()
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
pub fn button_visual(response: &egui::Response, base_fill: Color32, rect: egui::Rect) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.0))
    } else if response.hovered() {
        (lighten(base_fill, 0.08), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
