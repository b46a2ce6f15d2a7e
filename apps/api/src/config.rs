use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::dictionary::SkillDictionary;
use crate::skills::engine::SkillEngine;
use crate::skills::matcher::MatchMode;
use crate::skills::recommendations::DEFAULT_MAX_RECOMMENDATIONS;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file `{ "dictionary": [...] }` replacing the built-in skill list.
    pub dictionary_path: Option<PathBuf>,
    pub match_mode: MatchMode,
    pub max_recommendations: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            dictionary_path: lookup("SKILL_DICTIONARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            match_mode: match lookup("SKILL_MATCH_MODE") {
                Some(raw) => raw
                    .parse::<MatchMode>()
                    .context("SKILL_MATCH_MODE is invalid")?,
                None => MatchMode::default(),
            },
            max_recommendations: match lookup("MAX_RECOMMENDATIONS") {
                Some(raw) => raw
                    .parse::<NonZeroUsize>()
                    .context("MAX_RECOMMENDATIONS must be a positive integer")?
                    .get(),
                None => DEFAULT_MAX_RECOMMENDATIONS,
            },
        })
    }

    /// Loads the configured dictionary (or the built-in one) and builds the engine.
    pub fn build_engine(&self) -> Result<SkillEngine> {
        let dictionary = match &self.dictionary_path {
            Some(path) => SkillDictionary::from_file(path).with_context(|| {
                format!("Failed to load skill dictionary from {}", path.display())
            })?,
            None => SkillDictionary::builtin(),
        };

        if dictionary.is_empty() {
            tracing::warn!("Skill dictionary is empty; no skills will be extracted from text");
        }

        Ok(SkillEngine::new(
            dictionary,
            self.match_mode,
            self.max_recommendations,
        ))
    }
}
