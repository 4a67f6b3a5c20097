// ArticleShelf - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and manages the load lifecycle.

use crate::app::loader::LoadManager;
use crate::app::state::AppState;
use crate::core::export;
use crate::ui;
use crate::util::error::{self, ArticleShelfError};
use std::path::Path;

/// The ArticleShelf catalog viewer.
pub struct ArticleShelfApp {
    pub state: AppState,
    pub load_manager: LoadManager,
}

/// Export formats offered by the File menu.
#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ArticleShelfApp {
    /// Create the application and start loading `initial_source`, if any.
    pub fn new(state: AppState, initial_source: Option<String>) -> Self {
        let mut app = Self {
            state,
            load_manager: LoadManager::new(),
        };
        if let Some(source) = initial_source {
            app.start_load(source);
        }
        app
    }

    fn start_load(&mut self, source: String) {
        self.state.begin_load(&source);
        self.load_manager.start_load(source);
    }

    /// Write the current view (all pages) to a user-chosen file.
    fn export_view(&mut self, format: ExportFormat) {
        let (filter_name, extension) = match format {
            ExportFormat::Csv => ("CSV", "csv"),
            ExportFormat::Json => ("JSON", "json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter_name, &[extension])
            .set_file_name(format!("articles-export.{extension}"))
            .save_file()
        else {
            return;
        };

        self.state.status_message = match write_export(&self.state, &dest, format) {
            Ok(n) => {
                tracing::info!(path = %dest.display(), articles = n, "View exported");
                format!("Exported {n} articles to {filter_name}.")
            }
            Err(e) => {
                tracing::warn!(path = %dest.display(), error = %e, "Export failed");
                format!("{filter_name} export failed: {e}")
            }
        };
    }
}

fn write_export(
    state: &AppState,
    dest: &Path,
    format: ExportFormat,
) -> error::Result<usize> {
    let file = std::fs::File::create(dest).map_err(|e| ArticleShelfError::Io {
        path: dest.to_path_buf(),
        operation: "create export file",
        source: e,
    })?;
    let articles = state.view_articles();
    let count = match format {
        ExportFormat::Csv => export::export_csv(&articles, file, dest)?,
        ExportFormat::Json => {
            export::export_json(&articles, std::io::BufWriter::new(file), dest)?
        }
    };
    Ok(count)
}

impl eframe::App for ArticleShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for the load result.
        if let Some(progress) = self.load_manager.poll() {
            self.state.handle_progress(progress);
            ctx.request_repaint();
        }
        // Keep polling while the background thread is working.
        if self.load_manager.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Article List\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Article list", &["json"])
                            .pick_file()
                        {
                            self.start_load(path.display().to_string());
                        }
                        ui.close_menu();
                    }
                    let can_reload = self.state.source.is_some() && !self.state.loading;
                    if ui
                        .add_enabled(can_reload, egui::Button::new("Reload"))
                        .clicked()
                    {
                        if let Some(source) = self.state.source.clone() {
                            self.start_load(source);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when the view has rows
                    let has_rows = !self.state.view().is_empty();
                    ui.add_enabled_ui(has_rows, |ui| {
                        ui.menu_button("Export View", |ui| {
                            if ui.button("Export CSV\u{2026}").clicked() {
                                self.export_view(ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON\u{2026}").clicked() {
                                self.export_view(ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.dark_mode {
                        "Light Mode"
                    } else {
                        "Dark Mode"
                    };
                    if ui.button(label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ui::theme::apply(ctx, self.state.dark_mode, self.state.font_size);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Search toolbar
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::search::render(ui, &mut self.state);
            ui.add_space(2.0);
        });

        // Status bar / footer
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.loading {
                    ui.spinner();
                }
                if self.state.load_error.is_some() {
                    ui.colored_label(ui::theme::ERROR_TEXT, &self.state.status_message);
                } else {
                    ui.label(&self.state.status_message);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("DEBUG").small().weak());
                        ui.separator();
                    }
                    if !self.state.warnings.is_empty() {
                        ui.colored_label(
                            ui::theme::WARNING_TEXT,
                            format!("\u{26a0} {} config warning(s)", self.state.warnings.len()),
                        )
                        .on_hover_text(self.state.warnings.join("\n"));
                        ui.separator();
                    }
                    let footer = self.state.footer_stats(&chrono::Local);
                    if footer.total > 0 {
                        if let Some(newest) = footer.newest {
                            ui.label(format!("Latest: {newest}"));
                            ui.separator();
                        }
                        ui.label(format!("{} articles", footer.total));
                    }
                });
            });
        });

        // Pagination bar
        egui::TopBottomPanel::bottom("pagination_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui::panels::pagination::render(ui, &mut self.state);
            ui.add_space(2.0);
        });

        // Central panel (article table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::table::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
