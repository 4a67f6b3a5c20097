// ArticleShelf - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ArticleShelf operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ArticleShelfError {
    /// CSV import failed.
    Import(ImportError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ArticleShelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import(e) => write!(f, "Import error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ArticleShelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Import(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Import errors
// ---------------------------------------------------------------------------

/// Fatal errors raised while converting a CSV export into the article JSON.
///
/// Row- and field-level problems are never reported here: short rows are
/// dropped and bad numbers/URLs are defaulted by the importer itself.
#[derive(Debug)]
pub enum ImportError {
    /// Reading the CSV or writing the JSON output failed.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// The CSV file is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// A non-empty publish time could not be parsed.
    Timestamp { line: usize, raw: String },

    /// JSON serialisation of the article list failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(f, "cannot {operation} '{}': {source}", path.display()),
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Timestamp { line, raw } => write!(
                f,
                "data line {line}: cannot parse publish time '{raw}' \
                 (expected YYYY-MM-DD HH:MM:SS)"
            ),
            Self::Json { path, source } => {
                write!(f, "'{}': JSON serialisation failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Timestamp { .. } => None,
        }
    }
}

impl From<ImportError> for ArticleShelfError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while loading the article JSON into the catalog.
#[derive(Debug)]
pub enum LoadError {
    /// Reading a local file failed.
    Io { path: PathBuf, source: io::Error },

    /// The HTTP request could not be completed.
    Http { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    Status { url: String, status: u16 },

    /// The payload is not a JSON array of articles.
    Json {
        source_name: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Http { url, source } => write!(f, "request to '{url}' failed: {source}"),
            Self::Status { url, status } => {
                write!(f, "'{url}' answered with HTTP status {status}")
            }
            Self::Json {
                source_name,
                source,
            } => write!(f, "'{source_name}' is not a valid article list: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Http { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting the current catalog view.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ArticleShelfError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Never fatal: `load_config` turns these into warnings and keeps defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for ArticleShelf results.
pub type Result<T> = std::result::Result<T, ArticleShelfError>;

/// Render an error followed by its `source()` chain, one cause per line.
///
/// Used by the CLI so a failed import prints the full diagnostic.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        out.push_str("\n  caused by: ");
        out.push_str(&c.to_string());
        cause = c.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_chain_includes_sources() {
        let io = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = ArticleShelfError::from(ImportError::Io {
            path: PathBuf::from("data/articles.csv"),
            operation: "read",
            source: io,
        });
        let text = error_chain(&err);
        assert!(text.starts_with("Import error: cannot read 'data/articles.csv'"));
        assert!(text.contains("caused by: cannot read"));
        assert!(text.contains("caused by: no such file"));
    }

    #[test]
    fn test_timestamp_error_names_line() {
        let err = ImportError::Timestamp {
            line: 4,
            raw: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data line 4: cannot parse publish time 'yesterday' (expected YYYY-MM-DD HH:MM:SS)"
        );
    }
}
