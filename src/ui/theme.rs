// ArticleShelf - ui/theme.rs
//
// Colour scheme, badge and highlight colours, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Background behind keyword matches in titles.
pub fn highlight_bg_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(161, 98, 7) // Yellow 700
    } else {
        Color32::from_rgb(253, 224, 71) // Yellow 300
    }
}

/// Foreground for title text (plain and highlighted runs).
pub fn row_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(243, 244, 246) // Gray 100
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Hover colour for clickable titles.
pub fn link_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(96, 165, 250) // Blue 400
    } else {
        Color32::from_rgb(29, 78, 216) // Blue 700
    }
}

/// "Original" badge colours.
pub const ORIGINAL_BADGE_TEXT: Color32 = Color32::from_rgb(22, 163, 74); // Green 600
pub const ORIGINAL_BADGE_BG: Color32 = Color32::from_rgba_premultiplied(22, 163, 74, 30);

/// Status bar colours.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400
pub const WARNING_TEXT: Color32 = Color32::from_rgb(251, 191, 36); // Amber 400

/// Layout constants.
pub const ROW_HEIGHT: f32 = 24.0;
pub const NUMBER_COLUMN_WIDTH: f32 = 48.0;
pub const DATE_COLUMN_WIDTH: f32 = 96.0;
pub const BADGE_COLUMN_WIDTH: f32 = 72.0;
pub const SEARCH_BOX_WIDTH: f32 = 280.0;

/// Apply dark/light visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.4,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}
