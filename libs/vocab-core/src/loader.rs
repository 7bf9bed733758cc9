//! Vocabulary loading from the enabled sources.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::parser::parse;
use crate::types::{VocabSource, WordPair};

/// Fetches the raw text behind a source locator.
pub trait SourceFetcher {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Word count contributed by one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub id: String,
    pub words: usize,
}

/// A source that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceNotice {
    pub id: String,
    pub locator: String,
    pub message: String,
}

/// Outcome of loading every enabled source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub vocabulary: Vec<WordPair>,
    pub sources: Vec<SourceSummary>,
    pub notices: Vec<SourceNotice>,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    pub fn from_vocabulary(vocabulary: Vec<WordPair>) -> Self {
        Self {
            vocabulary,
            sources: Vec::new(),
            notices: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Fetch and parse every enabled source, one after the other, in declaration order.
///
/// A source that fails to fetch is recorded as a notice and contributes nothing.
pub async fn load_vocabulary<F>(fetcher: &F, sources: &[VocabSource]) -> LoadReport
where
    F: SourceFetcher + Sync,
{
    let mut report = LoadReport::from_vocabulary(Vec::new());

    for source in sources.iter().filter(|s| s.enabled) {
        match fetcher.fetch(&source.locator).await {
            Ok(text) => {
                let pairs = parse(&text);
                report.sources.push(SourceSummary {
                    id: source.id.clone(),
                    words: pairs.len(),
                });
                report.vocabulary.extend(pairs);
            }
            Err(err) => report.notices.push(SourceNotice {
                id: source.id.clone(),
                locator: source.locator.clone(),
                message: err.to_string(),
            }),
        }
    }

    report.loaded_at = Utc::now();
    report
}

/// Ordered set of sources the user can enable or disable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceCatalog {
    sources: Vec<VocabSource>,
}

impl SourceCatalog {
    pub fn new(sources: Vec<VocabSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[VocabSource] {
        &self.sources
    }

    /// Toggle a source. Returns the updated source, or `None` for an unknown id.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Option<&VocabSource> {
        let source = self.sources.iter_mut().find(|s| s.id == id)?;
        source.enabled = enabled;
        Some(&*source)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &VocabSource> {
        self.sources.iter().filter(|s| s.enabled)
    }
}
