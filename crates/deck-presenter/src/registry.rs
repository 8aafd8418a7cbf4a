//! Slide registry

use serde::Serialize;

use crate::config::{ConfigError, DeckConfig};
use crate::navigation::SlideIndex;

/// One slide's position and title
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlideMetadata {
    /// 1-based position
    pub index: usize,
    /// Slide title
    pub title: String,
}

/// Ordered, immutable collection of slides
#[derive(Clone, Debug)]
pub struct SlideRegistry {
    deck_title: String,
    slides: Vec<SlideMetadata>,
}

impl SlideRegistry {
    /// Create a registry from a deck title and slide titles
    pub fn new<I, T>(deck_title: impl Into<String>, titles: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let slides: Vec<SlideMetadata> = titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| SlideMetadata {
                index: i + 1,
                title: title.into(),
            })
            .collect();

        if slides.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }

        Ok(Self {
            deck_title: deck_title.into(),
            slides,
        })
    }

    /// Create a registry from a validated deck configuration
    pub fn from_config(config: &DeckConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.deck_title.clone(), config.slide_titles.iter().cloned())
    }

    /// Number of slides
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a registry holds at least one slide
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title shared by every slide's document title
    pub fn deck_title(&self) -> &str {
        &self.deck_title
    }

    /// All slides in order
    pub fn slides(&self) -> &[SlideMetadata] {
        &self.slides
    }

    /// Title of a slide, `"Slide N"` if the index is unknown
    pub fn title(&self, index: SlideIndex) -> String {
        self.slides
            .get(index.offset())
            .map(|s| s.title.clone())
            .unwrap_or_else(|| format!("Slide {}", index))
    }

    /// Document title for a slide: `"<slide title> | <deck title>"`
    pub fn document_title(&self, index: SlideIndex) -> String {
        format!("{} | {}", self.title(index), self.deck_title)
    }
}
