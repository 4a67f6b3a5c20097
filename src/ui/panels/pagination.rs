// ArticleShelf - ui/panels/pagination.rs
//
// Pagination bar: previous/next arrows, a window of page numbers with first
// and last shortcuts, and the "showing x-y of z" line.

use crate::app::state::AppState;
use crate::core::paginate::PageControl;

/// Render the pagination bar. Navigation is applied after the controls are
/// drawn.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let controls = state.page_controls();
    let info = state.page_info();
    let mut target: Option<usize> = None;

    ui.horizontal(|ui| {
        if info.total > 0 {
            ui.label(format!(
                "Showing {}\u{2013}{} of {}",
                info.first, info.last, info.total
            ));
        }

        if controls.is_empty() {
            return;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left layout: draw the bar reversed so it reads left to right.
            for control in controls.iter().rev() {
                match *control {
                    PageControl::Previous { target: page, enabled } => {
                        if ui
                            .add_enabled(enabled, egui::Button::new("\u{2039} Prev"))
                            .clicked()
                        {
                            target = Some(page);
                        }
                    }
                    PageControl::Next { target: page, enabled } => {
                        if ui
                            .add_enabled(enabled, egui::Button::new("Next \u{203a}"))
                            .clicked()
                        {
                            target = Some(page);
                        }
                    }
                    PageControl::Page { number, active } => {
                        if ui
                            .add(egui::Button::new(number.to_string()).selected(active))
                            .clicked()
                            && !active
                        {
                            target = Some(number);
                        }
                    }
                    PageControl::Ellipsis => {
                        ui.label("\u{2026}");
                    }
                }
            }
        });
    });

    if let Some(page) = target {
        state.go_to_page(page);
    }
}
