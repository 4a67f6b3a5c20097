// ArticleShelf - ui/panels/table.rs
//
// Central article table for the current page.
//
// Rows come pre-rendered from `AppState::page_rows`; this panel only lays
// them out. Titles are drawn with a LayoutJob so keyword matches get a
// highlight background while the rest of the title keeps the body colour.
// Clicking a title opens the article in the browser.

use crate::app::state::AppState;
use crate::core::model::SortField;
use crate::core::render::DisplayRow;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the table panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.view().is_empty() {
        ui.centered_and_justified(|ui| {
            if state.loading {
                ui.spinner();
            } else if let Some(ref error) = state.load_error {
                ui.colored_label(
                    theme::ERROR_TEXT,
                    format!("Could not load articles.\n{error}"),
                );
            } else if state.articles().is_empty() {
                ui.label("No articles loaded.\nOpen a list via File \u{2192} Open Article List.");
            } else {
                ui.label("No articles match the current search.");
            }
        });
        return;
    }

    let rows = state.page_rows(&chrono::Local);
    let mut sort_request: Option<SortField> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("article_table")
                .num_columns(4)
                .striped(true)
                .min_row_height(theme::ROW_HEIGHT)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.add_sized(
                        [theme::NUMBER_COLUMN_WIDTH, theme::ROW_HEIGHT],
                        egui::Label::new(egui::RichText::new("#").strong()),
                    );
                    if sort_header(ui, &*state, SortField::Date, theme::DATE_COLUMN_WIDTH) {
                        sort_request = Some(SortField::Date);
                    }
                    if sort_header(ui, &*state, SortField::Title, 0.0) {
                        sort_request = Some(SortField::Title);
                    }
                    ui.strong("");
                    ui.end_row();

                    for row in &rows {
                        render_row(ui, row, state.dark_mode);
                        ui.end_row();
                    }
                });
        });

    // Applied after the grid releases its borrow of `state`.
    if let Some(field) = sort_request {
        state.toggle_sort(field);
    }
}

/// Clickable column header. The active column shows its direction arrow.
/// Returns true when clicked.
fn sort_header(ui: &mut egui::Ui, state: &AppState, field: SortField, width: f32) -> bool {
    let catalog = state.catalog();
    let text = if catalog.sort_field() == field {
        format!("{} {}", field.label(), catalog.sort_direction().arrow())
    } else {
        field.label().to_string()
    };

    let button = egui::Button::new(egui::RichText::new(text).strong()).frame(false);
    let response = if width > 0.0 {
        ui.add_sized([width, theme::ROW_HEIGHT], button)
    } else {
        ui.add(button)
    };
    response.on_hover_text("Sort by this column").clicked()
}

fn render_row(ui: &mut egui::Ui, row: &DisplayRow, dark_mode: bool) {
    ui.add_sized(
        [theme::NUMBER_COLUMN_WIDTH, theme::ROW_HEIGHT],
        egui::Label::new(egui::RichText::new(row.number.to_string()).weak()),
    );
    ui.add_sized(
        [theme::DATE_COLUMN_WIDTH, theme::ROW_HEIGHT],
        egui::Label::new(egui::RichText::new(&row.date).monospace()),
    );

    let response = ui
        .add(egui::Label::new(title_job(ui, row, dark_mode)).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(&row.url);
    if response.hovered() {
        ui.painter().hline(
            response.rect.x_range(),
            response.rect.bottom(),
            egui::Stroke::new(1.0, theme::link_colour(dark_mode)),
        );
    }
    if response.clicked() && !row.url.is_empty() {
        tracing::debug!(url = %row.url, "Opening article");
        ui.ctx().open_url(egui::OpenUrl::new_tab(&row.url));
    }

    if row.is_original {
        ui.label(
            egui::RichText::new(" Original ")
                .small()
                .color(theme::ORIGINAL_BADGE_TEXT)
                .background_color(theme::ORIGINAL_BADGE_BG),
        );
    } else {
        ui.allocate_space(egui::vec2(theme::BADGE_COLUMN_WIDTH, 0.0));
    }
}

/// Title as a LayoutJob: highlighted runs get a background, plain runs the
/// body colour.
fn title_job(ui: &egui::Ui, row: &DisplayRow, dark_mode: bool) -> LayoutJob {
    let font = egui::TextStyle::Body.resolve(ui.style());
    let colour = theme::row_text_colour(dark_mode);

    let mut job = LayoutJob::default();
    for segment in &row.title {
        let format = if segment.highlighted {
            TextFormat {
                font_id: font.clone(),
                color: colour,
                background: theme::highlight_bg_colour(dark_mode),
                ..Default::default()
            }
        } else {
            TextFormat {
                font_id: font.clone(),
                color: colour,
                ..Default::default()
            }
        };
        job.append(&segment.text, 0.0, format);
    }
    job
}
