//! Deck configuration
//!
//! `DeckConfig::default()` is the bundled twelve-slide deck. Other decks are
//! loaded from camelCase JSON; missing fields fall back to the bundled values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest deck accepted by [`DeckConfig::validate`]
pub const MAX_SLIDES: usize = 99;

/// Default number of view events kept in the session
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Delay before the slide transition effect settles (ms)
pub const DEFAULT_TRANSITION_DELAY_MS: u32 = 50;

/// Delay before an accessibility announcement is posted (ms)
pub const DEFAULT_ANNOUNCEMENT_DELAY_MS: u32 = 100;

/// How long an announcement stays in the live region (ms)
pub const DEFAULT_ANNOUNCEMENT_LIFETIME_MS: u32 = 1500;

const BUNDLED_SLIDE_TITLES: [&str; 12] = [
    "Company Title & Overview",
    "Executive Summary",
    "2025 Performance Overview",
    "Monthly Revenue Trends",
    "Top Service Categories",
    "Major Contract Analysis",
    "Seasonal Business Patterns",
    "MailChimp Integration Strategy",
    "Automated Email Campaigns",
    "Implementation Roadmap",
    "Expected ROI and Benefits",
    "Next Steps & Action Items",
];

/// Errors raised while loading a deck configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("invalid deck configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The deck has no slides
    #[error("deck has no slides")]
    EmptyDeck,
    /// The deck has more slides than the presenter supports
    #[error("deck has {count} slides, at most {max} are supported")]
    TooManySlides {
        /// Number of slides in the configuration
        count: usize,
        /// Supported maximum
        max: usize,
    },
}

/// Static business figures carried into the data export
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    pub ytd_revenue: f64,
    pub avg_monthly_revenue: f64,
    pub peak_month: String,
    pub peak_revenue: f64,
    pub major_contracts_percentage: f64,
}

impl Default for BusinessMetrics {
    fn default() -> Self {
        Self {
            ytd_revenue: 3_224_410.55,
            avg_monthly_revenue: 358_267.84,
            peak_month: "August".to_string(),
            peak_revenue: 619_086.98,
            major_contracts_percentage: 27.5,
        }
    }
}

/// Deck configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckConfig {
    /// Company name used in exports
    pub company_name: String,
    /// Long presentation title used in exports
    pub presentation_title: String,
    /// Suffix of the document title (`"<slide> | <deck title>"`)
    pub deck_title: String,
    /// Slide titles in presentation order
    pub slide_titles: Vec<String>,
    /// Prefix for every session store key
    pub storage_prefix: String,
    /// File name offered for the data export
    pub export_file_name: String,
    /// Figures included in the data export
    pub business_metrics: BusinessMetrics,
    /// Number of view events kept in the session
    pub history_capacity: usize,
    /// Slide transition effect delay (ms)
    pub transition_delay_ms: u32,
    /// Announcement delay (ms)
    pub announcement_delay_ms: u32,
    /// Announcement lifetime (ms)
    pub announcement_lifetime_ms: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            company_name: "Clancy Brothers Pest Control LLC".to_string(),
            presentation_title: "2025 Performance Analysis & MailChimp Integration Strategy"
                .to_string(),
            deck_title: "Clancy Brothers Pest Control - 2025 Performance & MailChimp Strategy"
                .to_string(),
            slide_titles: BUNDLED_SLIDE_TITLES.iter().map(|t| t.to_string()).collect(),
            storage_prefix: "clancy".to_string(),
            export_file_name: "clancy-brothers-presentation-data.json".to_string(),
            business_metrics: BusinessMetrics::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            announcement_delay_ms: DEFAULT_ANNOUNCEMENT_DELAY_MS,
            announcement_lifetime_ms: DEFAULT_ANNOUNCEMENT_LIFETIME_MS,
        }
    }
}

impl DeckConfig {
    /// Parse and validate a deck configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the slide count is within the supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.slide_titles.len() {
            0 => Err(ConfigError::EmptyDeck),
            count if count > MAX_SLIDES => Err(ConfigError::TooManySlides {
                count,
                max: MAX_SLIDES,
            }),
            _ => Ok(()),
        }
    }

    /// Session store key holding the view history
    pub fn views_key(&self) -> String {
        format!("{}PresentationViews", self.storage_prefix)
    }

    /// Session store key holding the session id
    pub fn session_key(&self) -> String {
        format!("{}SessionId", self.storage_prefix)
    }

    /// Session store key prefix for action item flags
    pub fn action_key_prefix(&self) -> String {
        format!("{}-action-", self.storage_prefix)
    }
}
