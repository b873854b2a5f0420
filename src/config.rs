//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Every optional key has a
//! stock default substituted during deserialization, so downstream stages
//! never see an absent value. `pages` and `agenda_file` have no sensible
//! fallback and are required.
//!
//! ## Configuration Options
//!
//! ```toml
//! # CSS background for every page (optional)
//! background = "linear-gradient(135deg, #ffe0e6 0%, #ffc2d1 50%, #ffb3c6 100%)"
//!
//! # Markdown file with the plan, relative to this file (required)
//! agenda_file = "agenda.md"
//!
//! # Question pages, in order (required, at least one)
//! [[pages]]
//! title = "Will you be my Valentine?"
//! yes_button = "Yes!"
//! no_button = "No"
//!
//! [floating]
//! symbols = ["❤", "💕", "♥", "❣"]
//! count = 20
//! opacity = 0.15
//! min_duration = 5
//! max_duration = 15
//! min_size = 1
//! max_size = 2.5
//!
//! [fireworks]
//! title = "Yay!"
//! duration_seconds = 5
//! button_text = "Here's the plan..."
//! ```
//!
//! Config files are sparse — override just the values you want.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default page background, a soft pink gradient.
pub const DEFAULT_BACKGROUND: &str =
    "linear-gradient(135deg, #ffe0e6 0%, #ffc2d1 50%, #ffb3c6 100%)";

/// Site configuration loaded from `config.toml`.
///
/// Optional fields fall back to stock defaults; `pages` and `agenda_file`
/// are required and enforced by [`SiteConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// CSS background applied to every page.
    pub background: String,
    /// Floating-symbols animation settings.
    pub floating: FloatingConfig,
    /// Question pages, in order.
    pub pages: Vec<PageSpec>,
    /// Markdown agenda file, resolved relative to the config file.
    pub agenda_file: String,
    /// Celebration page settings.
    pub fireworks: FireworksConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            floating: FloatingConfig::default(),
            pages: Vec::new(),
            agenda_file: String::new(),
            fireworks: FireworksConfig::default(),
        }
    }
}

/// One question page: a title, a yes button, and a no button.
///
/// Identity is positional — the page's index in the sequence decides its
/// output filename and where its yes button leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Question shown as the page headline.
    pub title: String,
    /// Label on the yes button (a real link to the next page).
    pub yes_button: String,
    /// Label on the no button (never navigates, only dodges).
    pub no_button: String,
}

/// Floating-symbols animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloatingConfig {
    /// Symbols cycled through as elements spawn.
    pub symbols: Vec<String>,
    /// Total number of elements to spawn.
    pub count: u32,
    /// Element opacity (0 = invisible, 1 = opaque).
    pub opacity: f64,
    /// Shortest rise duration in seconds.
    pub min_duration: f64,
    /// Longest rise duration in seconds.
    pub max_duration: f64,
    /// Smallest font size in rem.
    pub min_size: f64,
    /// Largest font size in rem.
    pub max_size: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            symbols: ["❤", "💕", "♥", "❣"].map(String::from).to_vec(),
            count: 20,
            opacity: 0.15,
            min_duration: 5.0,
            max_duration: 15.0,
            min_size: 1.0,
            max_size: 2.5,
        }
    }
}

/// Celebration page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FireworksConfig {
    /// Headline on the celebration page.
    pub title: String,
    /// Seconds of fireworks before the continue button is revealed.
    pub duration_seconds: f64,
    /// Label on the continue button.
    pub button_text: String,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            title: "Yay!".to_string(),
            duration_seconds: 5.0,
            button_text: "Here's the plan...".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Required keys and range violations are reported by key name so a
    /// config mistake points straight at the offending line.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() {
            return Err(ConfigError::Validation(
                "pages must list at least one page".into(),
            ));
        }
        for (i, page) in self.pages.iter().enumerate() {
            if page.title.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "pages[{i}].title must not be empty"
                )));
            }
        }
        if self.agenda_file.is_empty() {
            return Err(ConfigError::Validation("agenda_file is required".into()));
        }
        let floating = &self.floating;
        if floating.symbols.is_empty() {
            return Err(ConfigError::Validation(
                "floating.symbols must not be empty".into(),
            ));
        }
        if floating.count == 0 {
            return Err(ConfigError::Validation(
                "floating.count must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&floating.opacity) {
            return Err(ConfigError::Validation(
                "floating.opacity must be between 0 and 1".into(),
            ));
        }
        if floating.min_duration > floating.max_duration {
            return Err(ConfigError::Validation(
                "floating.min_duration must not exceed floating.max_duration".into(),
            ));
        }
        if floating.min_size > floating.max_size {
            return Err(ConfigError::Validation(
                "floating.min_size must not exceed floating.max_size".into(),
            ));
        }
        if self.fireworks.duration_seconds < 0.0 {
            return Err(ConfigError::Validation(
                "fireworks.duration_seconds must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate the config file at `path`.
///
/// Deserialization substitutes stock defaults for any omitted optional
/// key, so resolution is total: the same file always yields the same
/// fully-populated config.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Smitten Configuration
# =====================
# Everything except `pages` and `agenda_file` is optional.
# Values shown below are the defaults.

# CSS background for every page.
background = "linear-gradient(135deg, #ffe0e6 0%, #ffc2d1 50%, #ffb3c6 100%)"

# Markdown file with the plan for the big day, relative to this file.
agenda_file = "agenda.md"

# ---------------------------------------------------------------------------
# Question pages, shown in order. Each needs a title and two button labels.
# The yes button moves on to the next page; the no button runs away.
# ---------------------------------------------------------------------------
[[pages]]
title = "Will you be my Valentine?"
yes_button = "Yes!"
no_button = "No"

# ---------------------------------------------------------------------------
# Floating symbols drifting up the page
# ---------------------------------------------------------------------------
[floating]
# Symbols cycled through as elements appear.
symbols = ["❤", "💕", "♥", "❣"]

# How many elements to spawn in total.
count = 20

# Element opacity (0 = invisible, 1 = opaque).
opacity = 0.15

# Rise duration range in seconds.
min_duration = 5
max_duration = 15

# Font size range in rem.
min_size = 1
max_size = 2.5

# ---------------------------------------------------------------------------
# Celebration page
# ---------------------------------------------------------------------------
[fireworks]
title = "Yay!"

# Seconds of fireworks before the continue button appears.
duration_seconds = 5

button_text = "Here's the plan..."
"##
}
