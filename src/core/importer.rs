// ArticleShelf - core/importer.rs
//
// CSV-to-article conversion. Pure transform over the CSV text; reading the
// input file and writing the JSON output live in app::import.
//
// Row handling:
//   - Blank lines are discarded before anything else, so the 1-based data-line
//     index used as a fallback row id counts only non-blank lines.
//   - Each line is split on its own; a stray quote cannot swallow later rows.
//   - Rows with fewer than MIN_FIELDS_PER_ROW fields are dropped silently.
//   - Bad numbers default locally; only an unparsable non-empty publish time
//     aborts the conversion.

use crate::core::model::{Article, DedupPolicy, ImportStats};
use crate::core::{timestamp, url_norm};
use crate::util::constants;
use crate::util::error::ImportError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::path::Path;

/// Options controlling a conversion run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// What to do with rows whose normalised URL repeats.
    pub dedup: DedupPolicy,

    /// Instant substituted for empty publish times.
    pub now: DateTime<Utc>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            dedup: DedupPolicy::default(),
            now: Utc::now(),
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// Articles sorted newest first.
    pub articles: Vec<Article>,

    /// Summary statistics, including row counters.
    pub stats: ImportStats,
}

/// Convert CSV text into a newest-first article list.
///
/// `source_path` is used only for logging.
pub fn convert(
    content: &str,
    source_path: &Path,
    options: &ImportOptions,
) -> Result<ImportOutcome, ImportError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    // The first non-blank line is the header; data lines are numbered from 1.
    let data_lines = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .skip(1);

    let mut articles = Vec::new();
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut skipped_rows = 0usize;
    let mut duplicate_urls = 0usize;
    let mut dropped_duplicates = 0usize;

    for (idx, raw_line) in data_lines.enumerate() {
        let line = idx + 1;
        let record = split_line(raw_line);

        if record.len() < constants::MIN_FIELDS_PER_ROW {
            skipped_rows += 1;
            tracing::trace!(line, fields = record.len(), "Skipping short row");
            continue;
        }

        let field = |i: usize| record.get(i).map(String::as_str).unwrap_or("");
        let (id, account, title, publish_time, position, flag, url) = (
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
            field(5),
            field(6),
        );

        let normalised = url_norm::normalise_url(url);
        if !normalised.is_empty() && !seen_urls.insert(normalised) {
            duplicate_urls += 1;
            if options.dedup == DedupPolicy::DropRepeatedUrls {
                dropped_duplicates += 1;
                tracing::debug!(line, url, "Dropping row with repeated URL");
                continue;
            }
        }

        let published_at =
            timestamp::parse_publish_time(publish_time, options.now).ok_or_else(|| {
                ImportError::Timestamp {
                    line,
                    raw: publish_time.to_string(),
                }
            })?;

        articles.push(Article {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            published_at,
            account_name: account.to_string(),
            is_original: flag == constants::ORIGINAL_FLAG_TOKEN,
            position: parse_position(position),
            source_row_id: parse_leading_int(id)
                .filter(|&n| n != 0)
                .unwrap_or(line as i64),
        });
    }

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let stats = ImportStats {
        skipped_rows,
        duplicate_urls,
        dropped_duplicates,
        ..ImportStats::from_sorted(&articles)
    };

    tracing::debug!(
        path = %source_path.display(),
        articles = stats.total,
        skipped = skipped_rows,
        duplicates = duplicate_urls,
        "CSV conversion complete"
    );

    Ok(ImportOutcome { articles, stats })
}

/// Split one CSV line into trimmed fields.
///
/// A quote anywhere toggles quoting and is dropped; inside quotes a doubled
/// quote is a literal quote. Quoting never spans lines, so an unclosed quote
/// only affects the rest of its own line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Position column: a positive leading integer, otherwise the default.
fn parse_position(raw: &str) -> u32 {
    parse_leading_int(raw)
        .filter(|&n| n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(constants::DEFAULT_POSITION)
}

/// Parse the leading integer of `raw` (`"12abc"` -> 12, `"-3"` -> -3).
///
/// Returns `None` when no digits lead the value or the number overflows.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}
