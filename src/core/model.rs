// ArticleShelf - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Article (normalised output of the importer)
// =============================================================================

/// A single published article, normalised from one CSV data row.
///
/// This is the record written to the JSON file by the importer and loaded
/// by the catalog. Field order here is the field order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier from the first CSV column, trimmed. Not necessarily unique.
    pub id: String,

    /// Article headline.
    pub title: String,

    /// Original article link as it appeared in the CSV (never normalised).
    pub url: String,

    /// Publish instant in UTC, serialised as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    #[serde(with = "crate::core::timestamp::iso_millis")]
    pub published_at: DateTime<Utc>,

    /// Publisher (account) name.
    pub account_name: String,

    /// True iff the originality flag was exactly the "yes" token.
    pub is_original: bool,

    /// Position of the article within its publishing batch (>= 1).
    pub position: u32,

    /// Numeric id when parsable, otherwise the 1-based data-line index.
    pub source_row_id: i64,
}

// =============================================================================
// Import options and statistics
// =============================================================================

/// What the importer does with rows whose normalised URL was already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// Keep every row; repeats are only counted.
    #[default]
    KeepAll,

    /// Drop the second and later rows sharing a normalised URL.
    DropRepeatedUrls,
}

impl DedupPolicy {
    /// Parse the config/CLI spelling (`keep-all`, `drop-repeated-urls`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "keep-all" => Some(Self::KeepAll),
            "drop-repeated-urls" => Some(Self::DropRepeatedUrls),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::KeepAll => "keep-all",
            Self::DropRepeatedUrls => "drop-repeated-urls",
        }
    }
}

/// Summary statistics for a completed import. Observational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Articles written to the output.
    pub total: usize,

    /// Articles flagged as original.
    pub originals: usize,

    /// Distinct account names, in first-seen order of the sorted output.
    pub accounts: Vec<String>,

    /// Oldest publish instant (None when the output is empty).
    pub earliest: Option<DateTime<Utc>>,

    /// Newest publish instant (None when the output is empty).
    pub latest: Option<DateTime<Utc>>,

    /// Data rows dropped for having fewer than the required field count.
    pub skipped_rows: usize,

    /// Rows whose normalised URL had already been seen.
    pub duplicate_urls: usize,

    /// Rows actually dropped by `DedupPolicy::DropRepeatedUrls`.
    pub dropped_duplicates: usize,
}

impl ImportStats {
    /// Compute the article-derived statistics for a list already sorted
    /// newest-first. Row counters are left at zero for the caller to fill.
    pub fn from_sorted(articles: &[Article]) -> Self {
        let mut accounts: Vec<String> = Vec::new();
        for article in articles {
            if !accounts.contains(&article.account_name) {
                accounts.push(article.account_name.clone());
            }
        }
        Self {
            total: articles.len(),
            originals: articles.iter().filter(|a| a.is_original).count(),
            accounts,
            earliest: articles.last().map(|a| a.published_at),
            latest: articles.first().map(|a| a.published_at),
            ..Default::default()
        }
    }
}

// =============================================================================
// Catalog vocabulary
// =============================================================================

/// Column the catalog is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Publish instant.
    #[default]
    Date,
    /// Title, collated for mixed Chinese/English text.
    Title,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Date => "Date",
            SortField::Title => "Title",
        }
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{25b2}",
            SortDirection::Descending => "\u{25bc}",
        }
    }
}

/// A page size drawn from the fixed set in `constants::PAGE_SIZES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Accept `n` only if it is one of the allowed page sizes.
    pub fn new(n: usize) -> Option<Self> {
        constants::PAGE_SIZES.contains(&n).then_some(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// All allowed page sizes, smallest first.
    pub fn all() -> impl Iterator<Item = PageSize> {
        constants::PAGE_SIZES.iter().map(|&n| PageSize(n))
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(constants::DEFAULT_PAGE_SIZE)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Load progress (background loader -> UI thread)
// =============================================================================

/// The single message a catalog load sends back to the UI thread.
#[derive(Debug, Clone)]
pub enum LoadProgress {
    /// The article list was fetched and decoded.
    Loaded {
        articles: Vec<Article>,
        source: String,
    },

    /// Fetching or decoding failed; the catalog shows its empty state.
    Failed { error: String },
}
