// ArticleShelf - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::{DedupPolicy, PageSize};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ArticleShelf configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/articleshelf/ or %APPDATA%\ArticleShelf\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();

            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");

            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[import]` section.
    pub import: ImportSection,
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[import]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ImportSection {
    /// CSV file to convert.
    pub csv_path: Option<String>,
    /// JSON file to write.
    pub output_path: Option<String>,
    /// "keep-all" or "drop-repeated-urls".
    pub dedup: Option<String>,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Path or http(s) URL of the article JSON.
    pub source: Option<String>,
    /// Initial page size.
    pub per_page: Option<usize>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Import --
    /// CSV input for `articleshelf import`.
    pub csv_path: PathBuf,
    /// JSON output for `articleshelf import`.
    pub output_path: PathBuf,
    /// Duplicate-URL handling.
    pub dedup: DedupPolicy,

    // -- Catalog --
    /// Source loaded by the viewer. None = `output_path`.
    pub catalog_source: Option<String>,
    /// Initial page size.
    pub page_size: PageSize,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(constants::DEFAULT_CSV_PATH),
            output_path: PathBuf::from(constants::DEFAULT_OUTPUT_PATH),
            dedup: DedupPolicy::default(),
            catalog_source: None,
            page_size: PageSize::default(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Source the viewer should load: the configured catalog source, or the
    /// importer's output file.
    pub fn resolved_catalog_source(&self) -> String {
        self.catalog_source
            .clone()
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let (config, warnings) = parse_config(&content, &config_path);
    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    (config, warnings)
}

/// Parse and validate config.toml content. `path` is used in messages only.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Config file rejected");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    // Validate each field, accumulating all problems.
    let mut config = AppConfig::default();

    // -- Import: paths --
    if let Some(ref csv) = raw.import.csv_path {
        if !csv.trim().is_empty() {
            config.csv_path = PathBuf::from(csv);
        }
    }
    if let Some(ref out) = raw.import.output_path {
        if !out.trim().is_empty() {
            config.output_path = PathBuf::from(out);
        }
    }

    // -- Import: dedup --
    if let Some(ref dedup) = raw.import.dedup {
        match DedupPolicy::from_name(dedup) {
            Some(policy) => config.dedup = policy,
            None => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[import] dedup".to_string(),
                    value: dedup.clone(),
                    expected: "\"keep-all\" or \"drop-repeated-urls\"".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- Catalog: source --
    if let Some(ref source) = raw.catalog.source {
        if !source.trim().is_empty() {
            config.catalog_source = Some(source.trim().to_string());
        }
    }

    // -- Catalog: per_page --
    if let Some(per_page) = raw.catalog.per_page {
        match PageSize::new(per_page) {
            Some(size) => config.page_size = size,
            None => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[catalog] per_page".to_string(),
                    value: per_page.to_string(),
                    expected: format!("one of {:?}", constants::PAGE_SIZES),
                }
                .to_string(),
            ),
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    (config, warnings)
}
