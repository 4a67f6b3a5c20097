// ArticleShelf - app/import.rs
//
// The `import` command: read the CSV export, convert it, and write the
// article JSON. Blocking and single-threaded; the first fatal error aborts
// the run before anything is written.

use crate::core::importer::{self, ImportOptions};
use crate::core::model::ImportStats;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::ImportError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a successful import run.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub csv_path: PathBuf,
    pub output_path: PathBuf,
    pub stats: ImportStats,
    pub duration: Duration,
}

impl ImportReport {
    /// Human-readable summary printed by the CLI.
    pub fn summary_lines(&self) -> Vec<String> {
        let stats = &self.stats;
        let mut lines = vec![
            format!(
                "Converted {} articles: {} -> {}",
                stats.total,
                self.csv_path.display(),
                self.output_path.display()
            ),
            format!("  Original articles: {}", stats.originals),
            format!(
                "  Accounts ({}): {}",
                stats.accounts.len(),
                stats.accounts.join(", ")
            ),
        ];

        if let (Some(earliest), Some(latest)) = (stats.earliest, stats.latest) {
            lines.push(format!(
                "  Date range: {} to {}",
                earliest.format(constants::DISPLAY_DATE_FORMAT),
                latest.format(constants::DISPLAY_DATE_FORMAT)
            ));
        }
        if stats.duplicate_urls > 0 {
            lines.push(format!(
                "  Repeated URLs: {} ({} dropped)",
                stats.duplicate_urls, stats.dropped_duplicates
            ));
        }
        lines.push(format!("  Finished in {:.2?}", self.duration));
        lines
    }
}

/// Convert `csv_path` into the article JSON at `output_path`.
///
/// The output's parent directory is created if needed and an existing file
/// is replaced.
pub fn run_import(
    csv_path: &Path,
    output_path: &Path,
    options: &ImportOptions,
) -> Result<ImportReport, ImportError> {
    let started = Instant::now();
    tracing::info!(
        csv = %csv_path.display(),
        output = %output_path.display(),
        dedup = options.dedup.name(),
        "Import started"
    );

    let bytes = std::fs::read(csv_path).map_err(|e| ImportError::Io {
        path: csv_path.to_path_buf(),
        operation: "read",
        source: e,
    })?;
    let content = String::from_utf8(bytes).map_err(|e| ImportError::InvalidEncoding {
        path: csv_path.to_path_buf(),
        source: e,
    })?;

    let outcome = importer::convert(&content, csv_path, options)?;

    let json = serde_json::to_vec_pretty(&outcome.articles).map_err(|e| ImportError::Json {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    fs::write_replacing(output_path, &json).map_err(|e| ImportError::Io {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    let report = ImportReport {
        csv_path: csv_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        stats: outcome.stats,
        duration: started.elapsed(),
    };

    tracing::info!(
        articles = report.stats.total,
        originals = report.stats.originals,
        accounts = report.stats.accounts.len(),
        skipped_rows = report.stats.skipped_rows,
        duplicate_urls = report.stats.duplicate_urls,
        elapsed_ms = report.duration.as_millis() as u64,
        "Import complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Article;
    use chrono::{TimeZone, Utc};

    const HEADER: &str = "id,account,title,published,position,original,url\n";

    fn options() -> ImportOptions {
        ImportOptions {
            now: Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_import_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("articles.csv");
        let out = dir.path().join("public").join("articles.json");
        std::fs::write(
            &csv,
            format!(
                "{HEADER}1,哥飞,First,2025-11-07 15:42:46,1,是,https://a.example/1\n\
                 2,哥飞,Second,2025-11-08 09:00:00,2,,https://a.example/2\n"
            ),
        )
        .unwrap();

        let report = run_import(&csv, &out, &options()).unwrap();
        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.originals, 1);

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("[\n  {"));
        let articles: Vec<Article> = serde_json::from_str(&written).unwrap();
        assert_eq!(articles[0].title, "Second");
        assert_eq!(articles[1].title, "First");
    }

    #[test]
    fn test_missing_csv_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_import(
            &dir.path().join("missing.csv"),
            &dir.path().join("out.json"),
            &options(),
        )
        .unwrap_err();
        assert!(matches!(err, ImportError::Io { operation: "read", .. }));
        assert!(!dir.path().join("out.json").exists());
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bad.csv");
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
        std::fs::write(&csv, bytes).unwrap();

        let err = run_import(&csv, &dir.path().join("out.json"), &options()).unwrap_err();
        assert!(matches!(err, ImportError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_bad_timestamp_leaves_previous_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("articles.csv");
        let out = dir.path().join("articles.json");
        std::fs::write(&out, "previous").unwrap();
        std::fs::write(
            &csv,
            format!("{HEADER}1,acct,T,not a date,1,,https://a.example/1\n"),
        )
        .unwrap();

        let err = run_import(&csv, &out, &options()).unwrap_err();
        assert!(matches!(err, ImportError::Timestamp { line: 1, .. }));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
    }

    #[test]
    fn test_summary_mentions_counts_and_range() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("articles.csv");
        std::fs::write(
            &csv,
            format!(
                "{HEADER}1,A,x,2025-01-02 12:00:00,1,是,https://a.example/1\n\
                 2,B,y,2025-03-04 12:00:00,1,否,https://a.example/1\n"
            ),
        )
        .unwrap();
        let report = run_import(&csv, &dir.path().join("o.json"), &options()).unwrap();
        let text = report.summary_lines().join("\n");
        assert!(text.contains("Converted 2 articles"));
        assert!(text.contains("Original articles: 1"));
        assert!(text.contains("Accounts (2)"));
        assert!(text.contains("Date range: 2025-01-02 to 2025-03-04"));
        assert!(text.contains("Repeated URLs: 1 (0 dropped)"));
    }
}
