// ArticleShelf - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (`import` and `view` commands)
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Running the importer, or launching the eframe catalog viewer

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use articleshelf::app;
pub use articleshelf::core;
pub use articleshelf::platform;
pub use articleshelf::ui;
pub use articleshelf::util;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Configure fonts for the egui context.
///
/// Article titles are mostly Chinese, which the egui built-in fonts do not
/// cover. The first CJK system font found is added as a fallback after the
/// built-in proportional and monospace fonts so Latin text keeps its look.
fn configure_fonts(ctx: &egui::Context) {
    let candidates: &[(&str, &str)] = &[
        #[cfg(target_os = "windows")]
        ("Microsoft YaHei", r"C:\Windows\Fonts\msyh.ttc"),
        #[cfg(target_os = "windows")]
        ("SimHei", r"C:\Windows\Fonts\simhei.ttf"),
        #[cfg(target_os = "macos")]
        ("PingFang SC", "/System/Library/Fonts/PingFang.ttc"),
        #[cfg(target_os = "macos")]
        ("STHeiti", "/System/Library/Fonts/STHeiti Light.ttc"),
        #[cfg(target_os = "linux")]
        (
            "Noto Sans CJK",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ),
        #[cfg(target_os = "linux")]
        (
            "Noto Sans CJK",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ),
        #[cfg(target_os = "linux")]
        (
            "WenQuanYi Micro Hei",
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        ),
    ];

    for (name, path) in candidates {
        match std::fs::read(path) {
            Ok(data) => {
                let mut fonts = egui::FontDefinitions::default();
                fonts
                    .font_data
                    .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push((*name).to_owned());
                    }
                }
                ctx.set_fonts(fonts);
                tracing::info!(font = name, path, "CJK fallback font configured");
                return;
            }
            Err(e) => {
                tracing::debug!(font = name, path, error = %e, "CJK font not available");
            }
        }
    }

    tracing::warn!("No CJK system font found; Chinese titles may render as squares");
}

/// ArticleShelf - CSV article importer and catalog viewer.
///
/// `import` converts a CSV export into the article JSON; `view` (the default)
/// opens the searchable, sortable, paginated catalog.
#[derive(Parser, Debug)]
#[command(name = "articleshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a CSV export into the article JSON file.
    Import(ImportArgs),

    /// Open the catalog viewer.
    View(ViewArgs),
}

#[derive(Args, Debug)]
struct ImportArgs {
    /// CSV file to read (default: [import] csv_path, else data/articles.csv).
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// JSON file to write (default: [import] output_path, else public/articles.json).
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,

    /// Drop rows whose normalised URL was already seen.
    #[arg(long = "dedup")]
    dedup: bool,
}

#[derive(Args, Debug, Default)]
struct ViewArgs {
    /// Article JSON to open: a file path or an http(s) URL.
    source: Option<String>,

    /// Initial page size (10, 20, 50, or 100).
    #[arg(long = "per-page")]
    per_page: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is loaded before logging so [logging] settings take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %platform_paths.config_dir.display(),
        "ArticleShelf starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    match cli.command {
        Some(Command::Import(args)) => run_import(args, &config),
        Some(Command::View(args)) => run_viewer(args, config, config_warnings, cli.debug),
        None => run_viewer(ViewArgs::default(), config, config_warnings, cli.debug),
    }
}

/// `articleshelf import`: exit 0 with a summary, or 1 with the error chain.
fn run_import(args: ImportArgs, config: &platform::config::AppConfig) -> ExitCode {
    let csv_path = args.csv.unwrap_or_else(|| config.csv_path.clone());
    let output_path = args.out.unwrap_or_else(|| config.output_path.clone());
    let options = crate::core::importer::ImportOptions {
        dedup: if args.dedup {
            crate::core::model::DedupPolicy::DropRepeatedUrls
        } else {
            config.dedup
        },
        ..Default::default()
    };

    match app::import::run_import(&csv_path, &output_path, &options) {
        Ok(report) => {
            for line in report.summary_lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = util::error::ArticleShelfError::from(e);
            tracing::error!(error = %err, "Import failed");
            eprintln!("Error: {}", util::error::error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

/// `articleshelf view`: launch the GUI.
fn run_viewer(
    args: ViewArgs,
    config: platform::config::AppConfig,
    config_warnings: Vec<String>,
    debug: bool,
) -> ExitCode {
    let mut page_size = config.page_size;
    if let Some(n) = args.per_page {
        match crate::core::model::PageSize::new(n) {
            Some(size) => page_size = size,
            None => tracing::warn!(
                per_page = n,
                allowed = ?util::constants::PAGE_SIZES,
                "Ignoring unsupported --per-page value"
            ),
        }
    }

    let source = args
        .source
        .unwrap_or_else(|| config.resolved_catalog_source());

    let mut state = app::state::AppState::new(page_size, debug);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::ArticleShelfApp::new(state, Some(source))))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ArticleShelf GUI: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
