// ArticleShelf - core/export.rs
//
// CSV and JSON writers for article lists.
// Core layer: writes to any Write trait object.
//
// JSON output is the importer's file format; CSV output is used to export
// the catalog's current view.

use crate::core::model::Article;
use crate::core::timestamp;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export articles to CSV.
///
/// Writes: id, account_name, title, published_at, position, is_original, url
/// (the importer's column order, with normalised values).
pub fn export_csv<W: Write>(
    articles: &[&Article],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer
        .write_record([
            "id",
            "account_name",
            "title",
            "published_at",
            "position",
            "is_original",
            "url",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for article in articles {
        csv_writer
            .write_record([
                article.id.as_str(),
                article.account_name.as_str(),
                article.title.as_str(),
                &timestamp::format_iso(&article.published_at),
                &article.position.to_string(),
                if article.is_original { "true" } else { "false" },
                article.url.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export articles as a pretty-printed JSON array.
pub fn export_json<W: Write>(
    articles: &[&Article],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, articles).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(articles.len())
}
