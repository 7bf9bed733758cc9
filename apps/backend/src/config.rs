//! Server configuration read from the environment.
//!
//! Variables (a `.env` file is honoured):
//! - `HOST`, `PORT`: listen address (default `0.0.0.0:3000`)
//! - `VOCAB_DIR`: root for relative source paths (default `.`)
//! - `VOCAB_SOURCES`: optional JSON file with the source catalog
//! - `ADVANCE_DELAY_MS`: feedback time before the next prompt (default 2000)
//! - `ADAPTIVE_MODE`: initial adaptive flag (default `true`)
//! - `STATIC_DIR`: optional directory served as the web front end

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use vocab_core::VocabSource;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("failed to load source catalog {path}: {message}")]
    Catalog { path: String, message: String },

    #[error("duplicate source id: {0}")]
    DuplicateSource(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub vocab_dir: PathBuf,
    pub sources: Vec<VocabSource>,
    pub advance_delay: Duration,
    pub adaptive: bool,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&get, "PORT", 3000)?;
        let vocab_dir = get("VOCAB_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let delay_ms: u64 = parse_var(&get, "ADVANCE_DELAY_MS", 2000)?;
        let adaptive = match get("ADAPTIVE_MODE") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "ADAPTIVE_MODE",
                value,
            })?,
            None => true,
        };

        let sources = match get("VOCAB_SOURCES") {
            Some(path) => load_catalog(path)?,
            None => default_sources(),
        };
        check_unique(&sources)?;

        Ok(Self {
            host,
            port,
            vocab_dir,
            sources,
            advance_delay: Duration::from_millis(delay_ms),
            adaptive,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The word lists shipped with the drill.
pub fn default_sources() -> Vec<VocabSource> {
    vec![
        VocabSource::new("sae24", "SAE 2.4", "vocabulaire_sae24.txt"),
        VocabSource::new("s1", "Semester 1", "vocabulaire_s1.txt"),
        VocabSource::new("s2", "Semester 2", "vocabulaire_s2.txt"),
        VocabSource::new("s3", "Semester 3", "vocabulaire_s3.txt"),
        VocabSource::new("liaisons", "Linking words", "Autres-mots/Liaisons/vocabulaire.txt"),
        VocabSource::new("vocabulaire", "General vocabulary", "Autres-mots/Vocabulaire/vocabulaire.txt"),
        VocabSource::new(
            "vocabulaire-liaisons",
            "Vocabulary and linking words",
            "Autres-mots/Vocabulaire-liaisons/vocabulaire.txt",
        ),
    ]
}

fn parse_var<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn load_catalog(path: String) -> Result<Vec<VocabSource>, ConfigError> {
    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Catalog {
        path: path.clone(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Catalog {
        path,
        message: e.to_string(),
    })
}

fn check_unique(sources: &[VocabSource]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for source in sources {
        if !seen.insert(source.id.as_str()) {
            return Err(ConfigError::DuplicateSource(source.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.advance_delay, Duration::from_secs(2));
        assert!(config.adaptive);
        assert_eq!(config.sources.len(), 7);
        assert!(config.sources.iter().all(|s| s.enabled));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ADVANCE_DELAY_MS", "500"),
            ("ADAPTIVE_MODE", "off"),
            ("VOCAB_DIR", "/srv/vocab"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.advance_delay, Duration::from_millis(500));
        assert!(!config.adaptive);
        assert_eq!(config.vocab_dir, PathBuf::from("/srv/vocab"));
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Invalid { key: "PORT", .. })));
    }

    #[test]
    fn test_invalid_adaptive_flag() {
        let result = Config::from_lookup(lookup(&[("ADAPTIVE_MODE", "maybe")]));
        assert!(matches!(result, Err(ConfigError::Invalid { key: "ADAPTIVE_MODE", .. })));
    }

    #[test]
    fn test_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "a", "label": "A", "path": "a.txt"}},
                {{"id": "b", "label": "B", "path": "https://example.org/b.txt", "enabled": false}}
            ]"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = Config::from_lookup(lookup(&[("VOCAB_SOURCES", path.as_str())])).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].locator, "a.txt");
        assert!(config.sources[0].enabled);
        assert!(!config.sources[1].enabled);
    }

    #[test]
    fn test_duplicate_source_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "label": "A", "path": "a.txt"}}, {{"id": "a", "label": "A2", "path": "b.txt"}}]"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let result = Config::from_lookup(lookup(&[("VOCAB_SOURCES", path.as_str())]));
        assert!(matches!(result, Err(ConfigError::DuplicateSource(id)) if id == "a"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let result = Config::from_lookup(lookup(&[("VOCAB_SOURCES", "/nonexistent/sources.json")]));
        assert!(matches!(result, Err(ConfigError::Catalog { .. })));
    }
}
