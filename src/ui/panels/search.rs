// ArticleShelf - ui/panels/search.rs
//
// Toolbar under the menu bar: keyword search box, clear button, active
// filter status, and the page-size selector.
//
// The keyword is applied on Enter or the Search button, not per keystroke,
// so typing never resets the page mid-word.

use crate::app::state::AppState;
use crate::core::model::PageSize;
use crate::ui::theme;

/// Render the search toolbar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let has_articles = !state.articles().is_empty();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(has_articles, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.search_text)
                    .hint_text("Search titles\u{2026}")
                    .desired_width(theme::SEARCH_BOX_WIDTH),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Search").clicked() || submitted {
                state.submit_search();
            }

            let can_clear =
                !state.catalog().keyword().is_empty() || !state.search_text.is_empty();
            if ui
                .add_enabled(can_clear, egui::Button::new("Clear"))
                .on_hover_text("Show all articles")
                .clicked()
            {
                state.clear_keyword();
            }
        });

        ui.separator();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.catalog().page_size();
            let mut selected = current;
            egui::ComboBox::from_id_salt("page_size")
                .selected_text(format!("{current} / page"))
                .show_ui(ui, |ui| {
                    for size in PageSize::all() {
                        ui.selectable_value(&mut selected, size, format!("{size} / page"));
                    }
                });
            if selected != current {
                state.set_page_size(selected);
            }
            ui.label("Show:");
        });
    });

    render_filter_status(ui, state);
}

/// "Filtering by ..." line with a clear control, shown only while a keyword
/// is active.
fn render_filter_status(ui: &mut egui::Ui, state: &mut AppState) {
    if state.catalog().keyword().is_empty() {
        return;
    }

    let keyword = state.catalog().keyword().to_string();
    let matches = state.view().len();
    let total = state.articles().len();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "Filtering by \"{keyword}\": {matches} of {total} articles"
            ))
            .weak(),
        );
        if ui
            .small_button("\u{2715}")
            .on_hover_text("Clear search")
            .clicked()
        {
            state.clear_keyword();
        }
    });
}
