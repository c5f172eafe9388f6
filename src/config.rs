//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WORDSEARCH_WIDTH` | 8 | Board width in cells |
//! | `WORDSEARCH_HEIGHT` | 8 | Board height in cells |
//! | `WORDSEARCH_WORDS` | `Hello` | Comma-separated words, played in order |
//! | `WORDSEARCH_SEED` | clock | Seed for the board's random source |
//! | `WORDSEARCH_REVEAL_MS` | 1000 | Delay before a verdict is revealed |
//! | `WORDSEARCH_LOG_PATH` | unset | Write tracing output to this file |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::{Dimensions, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, REVEAL_DELAY_MS};

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Word used when no list is configured.
pub const DEFAULT_WORD: &str = "Hello";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dims: Dimensions,
    pub words: Vec<String>,
    pub seed: u32,
    pub reveal_delay_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dims: Dimensions::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT),
            words: vec![DEFAULT_WORD.to_string()],
            seed: clock_seed(),
            reveal_delay_ms: REVEAL_DELAY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        let width = parse_var(&lookup, "WORDSEARCH_WIDTH")?.unwrap_or(config.dims.width);
        let height = parse_var(&lookup, "WORDSEARCH_HEIGHT")?.unwrap_or(config.dims.height);
        if width == 0 || height == 0 {
            bail!("board dimensions must be positive, got {width}x{height}");
        }
        config.dims = Dimensions::new(width, height);

        if let Some(list) = lookup("WORDSEARCH_WORDS") {
            let words: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            if words.is_empty() {
                bail!("WORDSEARCH_WORDS must contain at least one word");
            }
            config.words = words;
        }

        if let Some(seed) = parse_var(&lookup, "WORDSEARCH_SEED")? {
            config.seed = seed;
        }
        if let Some(delay) = parse_var(&lookup, "WORDSEARCH_REVEAL_MS")? {
            config.reveal_delay_ms = delay;
        }

        config.log_path = lookup("WORDSEARCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(None),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.dims, Dimensions::new(8, 8));
        assert_eq!(config.words, vec!["Hello".to_string()]);
        assert_eq!(config.reveal_delay_ms, 1000);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = GameConfig::from_lookup(lookup(&[
            ("WORDSEARCH_WIDTH", "10"),
            ("WORDSEARCH_HEIGHT", " 6 "),
            ("WORDSEARCH_WORDS", "rust, cargo,,crate "),
            ("WORDSEARCH_SEED", "77"),
            ("WORDSEARCH_REVEAL_MS", "250"),
            ("WORDSEARCH_LOG_PATH", "/tmp/ws.log"),
        ]))
        .unwrap();
        assert_eq!(config.dims, Dimensions::new(10, 6));
        assert_eq!(config.words, vec!["rust", "cargo", "crate"]);
        assert_eq!(config.seed, 77);
        assert_eq!(config.reveal_delay_ms, 250);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/ws.log")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = GameConfig::from_lookup(lookup(&[("WORDSEARCH_WIDTH", "wide")])).unwrap_err();
        assert!(err.to_string().contains("WORDSEARCH_WIDTH"));
    }

    #[test]
    fn rejects_zero_dimensions_and_empty_word_lists() {
        assert!(GameConfig::from_lookup(lookup(&[("WORDSEARCH_HEIGHT", "0")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[("WORDSEARCH_WORDS", " , ")])).is_err());
    }

    #[test]
    fn blank_log_path_is_ignored() {
        let config = GameConfig::from_lookup(lookup(&[("WORDSEARCH_LOG_PATH", "  ")])).unwrap();
        assert!(config.log_path.is_none());
    }

    #[test]
    fn default_log_filter_is_warn_and_parses() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
