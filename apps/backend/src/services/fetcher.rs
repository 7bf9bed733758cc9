//! Source fetchers for local word lists and remote URLs.

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use reqwest::StatusCode;
use vocab_core::{FetchError, SourceFetcher};

/// Reads word lists relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceFetcher for FileFetcher {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let path = self.root.join(locator);
        let locator = locator.to_string();

        async move {
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| match err.kind() {
                    ErrorKind::NotFound => FetchError::NotFound { locator },
                    _ => FetchError::Io {
                        locator,
                        message: err.to_string(),
                    },
                })
        }
    }
}

/// Downloads word lists over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let request = self.client.get(locator);
        let locator = locator.to_string();

        async move {
            let transport = |err: reqwest::Error, locator: &str| FetchError::Io {
                locator: locator.to_string(),
                message: err.to_string(),
            };

            let response = request.send().await.map_err(|e| transport(e, &locator))?;
            match response.status() {
                StatusCode::NOT_FOUND => Err(FetchError::NotFound { locator }),
                status if !status.is_success() => Err(FetchError::Status {
                    locator,
                    status: status.as_u16(),
                }),
                _ => response.text().await.map_err(|e| transport(e, &locator)),
            }
        }
    }
}

/// Dispatches URLs to the HTTP fetcher and everything else to the file fetcher.
#[derive(Debug, Clone)]
pub struct VocabFetcher {
    files: FileFetcher,
    http: HttpFetcher,
}

impl VocabFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            files: FileFetcher::new(root),
            http: HttpFetcher::default(),
        }
    }
}

impl SourceFetcher for VocabFetcher {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let remote = is_remote(locator);
        async move {
            if remote {
                self.http.fetch(locator).await
            } else {
                self.files.fetch(locator).await
            }
        }
    }
}

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}
