//! Session data export and progress query

use serde::{Deserialize, Serialize};

use crate::config::BusinessMetrics;
use crate::navigation::PresentationState;
use crate::registry::SlideRegistry;
use crate::session::ViewEvent;

/// Document offered by the data export
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub company_name: String,
    pub presentation_title: String,
    pub total_slides: usize,
    pub current_slide: usize,
    pub view_history: Vec<ViewEvent>,
    pub business_metrics: BusinessMetrics,
    /// ISO-8601 UTC timestamp of the export
    pub export_date: String,
    pub session_id: String,
}

impl ExportPayload {
    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Current position in human terms
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_slide: usize,
    pub total_slides: usize,
    /// Rounded to the nearest whole percent
    pub percentage: u32,
    pub slide_title: String,
}

impl Progress {
    /// Describe a state
    pub fn new(state: &PresentationState, registry: &SlideRegistry) -> Self {
        Self {
            current_slide: state.current().get(),
            total_slides: state.total(),
            percentage: state.percent_complete().round() as u32,
            slide_title: registry.title(state.current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Navigator;

    #[test]
    fn test_progress_rounding() {
        let registry = SlideRegistry::new("Deck", ["A", "B", "C"]).unwrap();
        let mut nav = Navigator::new(3);

        let progress = Progress::new(&nav.state(), &registry);
        assert_eq!(progress.percentage, 33);
        assert_eq!(progress.slide_title, "A");

        nav.advance();
        assert_eq!(Progress::new(&nav.state(), &registry).percentage, 67);
    }

    #[test]
    fn test_progress_json_shape() {
        let registry = SlideRegistry::new("Deck", ["A", "B"]).unwrap();
        let json = serde_json::to_value(Progress::new(&Navigator::new(2).state(), &registry)).unwrap();

        assert_eq!(json["currentSlide"], 1);
        assert_eq!(json["totalSlides"], 2);
        assert_eq!(json["percentage"], 50);
        assert_eq!(json["slideTitle"], "A");
    }

    #[test]
    fn test_export_json_shape() {
        let payload = ExportPayload {
            company_name: "Acme".to_string(),
            presentation_title: "Review".to_string(),
            total_slides: 12,
            current_slide: 4,
            view_history: Vec::new(),
            business_metrics: BusinessMetrics::default(),
            export_date: "2025-01-05T10:00:00.000Z".to_string(),
            session_id: "session_1_abc".to_string(),
        };

        let json = payload.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"companyName\": \"Acme\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currentSlide"], 4);
        assert_eq!(value["businessMetrics"]["peakMonth"], "August");
        assert_eq!(value["businessMetrics"]["majorContractsPercentage"], 27.5);
        assert!(value["viewHistory"].as_array().unwrap().is_empty());
    }
}
