// ArticleShelf - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ArticleShelf";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ArticleShelf";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Import
// =============================================================================

/// CSV path used by `articleshelf import` when neither CLI nor config names one.
pub const DEFAULT_CSV_PATH: &str = "data/articles.csv";

/// JSON output path used when neither CLI nor config names one.
/// Also the default catalog source.
pub const DEFAULT_OUTPUT_PATH: &str = "public/articles.json";

/// Minimum number of fields a data row must carry to become an article.
/// Shorter rows are dropped without being reported.
pub const MIN_FIELDS_PER_ROW: usize = 7;

/// The originality-flag token meaning "yes". Matched exactly after trimming.
pub const ORIGINAL_FLAG_TOKEN: &str = "是";

/// Wall-clock format of the publish-time column.
pub const PUBLISH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed offset of the publish-time column (UTC+8), in seconds.
pub const PUBLISH_TIME_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Position assigned when the CSV value is missing, unparsable, or not positive.
pub const DEFAULT_POSITION: u32 = 1;

/// Host fragment identifying links whose query strings are normalised.
pub const NORMALISED_URL_HOST: &str = "mp.weixin.qq.com";

/// Query parameters retained (in this order) when normalising article links.
pub const NORMALISED_URL_PARAMS: &[&str] = &["__biz", "mid", "idx", "sn"];

// =============================================================================
// Catalog
// =============================================================================

/// Allowed page sizes, smallest first.
pub const PAGE_SIZES: &[usize] = &[10, 20, 50, 100];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum number of contiguous page-number buttons in the pagination bar.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Locale used for title collation.
pub const TITLE_COLLATION_LOCALE: &str = "zh";

/// Date format used in the catalog's date column.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Markup wrapped around keyword matches in rendered titles.
pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Timeout for fetching the catalog over HTTP.
pub const HTTP_LOAD_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
