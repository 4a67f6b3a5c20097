// ArticleShelf - tests/e2e_import.rs
//
// End-to-end tests for the import command: a real CSV file on disk in,
// a real JSON file on disk out, read back through the catalog loader.

use articleshelf::app::import::run_import;
use articleshelf::app::loader::load_articles;
use articleshelf::core::importer::ImportOptions;
use articleshelf::core::model::{Article, DedupPolicy};
use articleshelf::util::error::ImportError;
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn options(dedup: DedupPolicy) -> ImportOptions {
    ImportOptions {
        dedup,
        now: Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
    }
}

fn import_fixture(dedup: DedupPolicy) -> (tempfile::TempDir, PathBuf, Vec<Article>) {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public").join("articles.json");
    run_import(&fixture("articles_sample.csv"), &out, &options(dedup)).unwrap();
    let articles = load_articles(&out.display().to_string()).unwrap();
    (dir, out, articles)
}

// =============================================================================
// Import E2E
// =============================================================================

/// The fixture converts into five articles, newest first, with the short
/// row dropped and the repeated URL counted.
#[test]
fn e2e_import_fixture_keep_all() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public").join("articles.json");
    let report = run_import(
        &fixture("articles_sample.csv"),
        &out,
        &options(DedupPolicy::KeepAll),
    )
    .unwrap();

    assert_eq!(report.stats.total, 5);
    assert_eq!(report.stats.originals, 3);
    assert_eq!(report.stats.skipped_rows, 1);
    assert_eq!(report.stats.duplicate_urls, 1);
    assert_eq!(report.stats.dropped_duplicates, 0);
    assert_eq!(report.stats.accounts, vec!["哥飞", "Indie Hacker"]);
    assert!(out.exists(), "output file should be created with its parent dir");

    let articles = load_articles(&out.display().to_string()).unwrap();
    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["abc", "1001", "1002", "1003", "1006"]);
    assert!(articles
        .windows(2)
        .all(|w| w[0].published_at >= w[1].published_at));
}

/// Field-level normalisation survives the trip through the JSON file.
#[test]
fn e2e_import_fixture_fields() {
    let (_dir, out, articles) = import_fixture(DedupPolicy::KeepAll);

    let first = articles.iter().find(|a| a.id == "1001").unwrap();
    assert_eq!(first.title, "出海做网站, 从零开始");
    assert_eq!(first.account_name, "哥飞");
    assert!(first.is_original);
    assert_eq!(first.position, 1);
    assert_eq!(first.source_row_id, 1001);
    // The stored URL is never normalised.
    assert!(first.url.ends_with("&chksm=77#rd"));

    let quoted = articles.iter().find(|a| a.id == "1003").unwrap();
    assert_eq!(quoted.title, "He said \"ship it\"");

    // Non-numeric id and position fall back; the fallback id counts only
    // non-blank data lines.
    let fallback = articles.iter().find(|a| a.id == "abc").unwrap();
    assert_eq!(fallback.source_row_id, 4);
    assert_eq!(fallback.position, 1);
    assert!(!fallback.is_original);

    let json = fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"published_at\": \"2025-11-07T07:42:46.000Z\""));
    assert!(json.contains("\"published_at\": \"2025-11-05T13:30:00.000Z\""));
}

/// DropRepeatedUrls keeps the first row for a normalised URL.
#[test]
fn e2e_import_fixture_drop_repeated_urls() {
    let (_dir, _out, articles) = import_fixture(DedupPolicy::DropRepeatedUrls);
    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1001", "1002", "1003", "1006"]);
}

/// A rerun fully replaces the previous output.
#[test]
fn e2e_import_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("articles.json");
    fs::write(&out, "[{\"stale\": true}]").unwrap();

    let csv = dir.path().join("one.csv");
    fs::write(
        &csv,
        "id,account,title,time,position,original,url\n\
         9,acct,Only,2025-01-01 08:00:00,1,是,https://example.com/only\n",
    )
    .unwrap();

    run_import(&csv, &out, &options(DedupPolicy::KeepAll)).unwrap();
    let articles = load_articles(&out.display().to_string()).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Only");
    assert_eq!(
        articles[0].published_at,
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    );
}

/// A header-only file produces an empty array, not an error.
#[test]
fn e2e_import_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("empty.csv");
    let out = dir.path().join("articles.json");
    fs::write(&csv, "id,account,title,time,position,original,url\n\n").unwrap();

    let report = run_import(&csv, &out, &options(DedupPolicy::KeepAll)).unwrap();
    assert_eq!(report.stats.total, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "[]");
}

/// An unparsable publish time aborts without creating the output.
#[test]
fn e2e_import_bad_timestamp_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("bad.csv");
    let out = dir.path().join("public").join("articles.json");
    fs::write(
        &csv,
        "id,account,title,time,position,original,url\n\
         1,acct,Fine,2025-01-01 08:00:00,1,,https://example.com/1\n\
         2,acct,Broken,07/11/2025,1,,https://example.com/2\n",
    )
    .unwrap();

    let err = run_import(&csv, &out, &options(DedupPolicy::KeepAll)).unwrap_err();
    match err {
        ImportError::Timestamp { line, raw } => {
            assert_eq!(line, 2);
            assert_eq!(raw, "07/11/2025");
        }
        other => panic!("expected timestamp error, got {other}"),
    }
    assert!(!out.exists());
}
