// ArticleShelf - app/loader.rs
//
// Catalog loading. Fetches the article JSON from a local path or an http(s)
// URL on a background thread and hands the result to the UI thread over an
// mpsc channel.
//
// Architecture:
//   - `LoadManager` lives on the UI thread; `load_articles` runs on a background thread.
//   - Each load sends exactly one `LoadProgress` message.
//   - Starting a new load replaces the receiver; a superseded thread's send
//     fails and its result is discarded.

use crate::core::model::{Article, LoadProgress};
use crate::util::constants;
use crate::util::error::{error_chain, LoadError};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Manages catalog loads on a background thread.
pub struct LoadManager {
    /// Channel receiver for the in-flight load, if any.
    progress_rx: Option<mpsc::Receiver<LoadProgress>>,
}

impl LoadManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start loading `source` (a file path or an http(s) URL).
    ///
    /// Spawns a background thread immediately. Any load already in flight is
    /// abandoned.
    pub fn start_load(&mut self, source: String) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        tracing::info!(source = %source, "Catalog load started");

        std::thread::spawn(move || {
            let started = Instant::now();
            let msg = match load_articles(&source) {
                Ok(articles) => {
                    tracing::info!(
                        source = %source,
                        articles = articles.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Catalog load complete"
                    );
                    LoadProgress::Loaded { articles, source }
                }
                Err(e) => {
                    tracing::error!(source = %source, error = %error_chain(&e), "Catalog load failed");
                    LoadProgress::Failed {
                        error: e.to_string(),
                    }
                }
            };
            // Receiver dropped or replaced; nothing left to notify.
            let _ = tx.send(msg);
        });
    }

    /// True while a load has been started and its result not yet polled.
    pub fn is_loading(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Poll for the load result without blocking.
    ///
    /// Returns the message once; the receiver is released afterwards. A
    /// worker that died without sending is reported as a failure.
    pub fn poll(&mut self) -> Option<LoadProgress> {
        let rx = self.progress_rx.as_ref()?;
        match rx.try_recv() {
            Ok(msg) => {
                self.progress_rx = None;
                Some(msg)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.progress_rx = None;
                Some(LoadProgress::Failed {
                    error: "Loader thread exited without a result".to_string(),
                })
            }
        }
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// True for `http://` and `https://` sources.
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch and decode the article list. Blocking.
pub fn load_articles(source: &str) -> Result<Vec<Article>, LoadError> {
    let body = if is_remote_source(source) {
        fetch_remote(source.trim())?
    } else {
        let path = PathBuf::from(source);
        std::fs::read_to_string(&path).map_err(|e| LoadError::Io { path, source: e })?
    };

    serde_json::from_str(&body).map_err(|e| LoadError::Json {
        source_name: source.to_string(),
        source: e,
    })
}

/// GET `url` and return the body. Non-success statuses are errors.
fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let http_err = |e| LoadError::Http {
        url: url.to_string(),
        source: e,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(constants::HTTP_LOAD_TIMEOUT_SECS))
        .user_agent(format!(
            "{}/{}",
            constants::APP_NAME,
            constants::APP_VERSION
        ))
        .build()
        .map_err(http_err)?;

    let response = client.get(url).send().map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tracing::debug!(url, status = status.as_u16(), "HTTP response received");
    response.text().map_err(http_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
      {
        "id": "7",
        "title": "Hello",
        "url": "https://example.com/7",
        "published_at": "2025-11-07T07:42:46.000Z",
        "account_name": "acct",
        "is_original": true,
        "position": 1,
        "source_row_id": 7
      }
    ]"#;

    #[test]
    fn test_remote_source_detection() {
        assert!(is_remote_source("https://example.com/articles.json"));
        assert!(is_remote_source("HTTP://example.com/a.json"));
        assert!(!is_remote_source("public/articles.json"));
        assert!(!is_remote_source("C:\\data\\articles.json"));
    }

    #[test]
    fn test_load_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let articles = load_articles(&path.display().to_string()).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[0].source_row_id, 7);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_articles("/nonexistent/articleshelf/articles.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_non_array_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, r#"{"articles": []}"#).unwrap();
        let err = load_articles(&path.display().to_string()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    /// Serve one HTTP response on 127.0.0.1 and return the URL to fetch.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });
        format!("http://127.0.0.1:{port}/articles.json")
    }

    #[test]
    fn test_http_error_status_is_load_failure() {
        let url = serve_once("404 Not Found", "not here");
        match load_articles(&url).unwrap_err() {
            LoadError::Status { status, url: failed } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_http_success_decodes_body() {
        let url = serve_once("200 OK", SAMPLE);
        let articles = load_articles(&url).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
    }

    #[test]
    fn test_manager_delivers_single_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut manager = LoadManager::new();
        assert!(!manager.is_loading());
        manager.start_load(path.display().to_string());
        assert!(manager.is_loading());

        let deadline = Instant::now() + Duration::from_secs(10);
        let msg = loop {
            if let Some(msg) = manager.poll() {
                break msg;
            }
            assert!(Instant::now() < deadline, "load did not finish");
            std::thread::sleep(Duration::from_millis(10));
        };

        match msg {
            LoadProgress::Loaded { articles, .. } => assert_eq!(articles.len(), 1),
            LoadProgress::Failed { error } => panic!("unexpected failure: {error}"),
        }
        assert!(!manager.is_loading());
        assert!(manager.poll().is_none());
    }
}
