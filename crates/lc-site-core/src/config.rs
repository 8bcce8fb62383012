//! Page-level tuning knobs.
//!
//! Defaults match the deployed site. A page can override any subset by
//! embedding a JSON object in `<script type="application/json" id="siteConfig">`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal_threshold must be within 0.0..=1.0, got {0}")]
    RevealThreshold(f64),
    #[error("reveal_selector cannot be empty")]
    EmptySelector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header_scroll_threshold: f64,
    pub status_message_ttl_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub reveal_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            status_message_ttl_ms: 5_000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            reveal_stagger_ms: 100,
            reveal_selector: ".service-card, .team-card, .testimonial-card, .feature".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        if self.reveal_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }
}
