//! Construction parameters and their JSON persistence

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// Construction parameters for a [`Whittaker`](crate::Whittaker) instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhittakerConfig {
    /// Dimension N of gl(N)
    pub rank: usize,

    /// Carry ħ as a formal Laurent parameter instead of setting ħ = 1
    pub asymptotic: bool,

    /// Names of the copies of the vector representation
    pub prefixes: Vec<String>,

    /// Extra series steps tolerated above the filtration bound
    pub series_slack: usize,
}

impl Default for WhittakerConfig {
    fn default() -> Self {
        Self {
            rank: 2,
            asymptotic: false,
            prefixes: vec!["u".to_string(), "v".to_string()],
            series_slack: 1,
        }
    }
}

impl WhittakerConfig {
    /// Default configuration for gl(rank)
    pub fn new(rank: usize) -> Self {
        Self {
            rank,
            ..Default::default()
        }
    }

    /// Toggle the asymptotic (formal ħ) mode
    pub fn with_asymptotic(mut self, asymptotic: bool) -> Self {
        self.asymptotic = asymptotic;
        self
    }

    /// Replace the representation prefixes
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: WhittakerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check rank and prefix constraints
    ///
    /// Prefixes must be non-empty, distinct, free of `_` and different from
    /// `E` so that every generator name is unambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.rank == 0 {
            return Err(Error::InvalidConfig("rank must be at least 1".to_string()));
        }
        let mut seen = HashSet::new();
        for prefix in &self.prefixes {
            if prefix.is_empty() || prefix.contains('_') || prefix == "E" {
                return Err(Error::InvalidConfig(format!(
                    "prefix {:?} clashes with generator naming",
                    prefix
                )));
            }
            if !seen.insert(prefix.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "prefix {:?} listed twice",
                    prefix
                )));
            }
        }
        Ok(())
    }
}
