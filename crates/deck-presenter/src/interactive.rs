//! Hover effects for cards and metrics
//!
//! Style declarations applied on pointer enter and reset on leave. An empty
//! value removes the inline property.

/// Inline style change applied on hover
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverEffect {
    /// CSS selectors of the elements receiving the effect
    pub selectors: &'static [&'static str],
    /// `(property, value)` pairs applied on pointer enter
    pub enter: &'static [(&'static str, &'static str)],
    /// `(property, value)` pairs applied on pointer leave
    pub leave: &'static [(&'static str, &'static str)],
}

impl HoverEffect {
    /// Selectors joined for `querySelectorAll`
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

/// Lift for content cards
pub const CARD_HOVER: HoverEffect = HoverEffect {
    selectors: &[
        ".opp-card",
        ".highlight-card",
        ".insight-item",
        ".reason-card",
        ".contract-card",
        ".season-card",
        ".campaign-card",
        ".phase",
        ".projection-card",
        ".benefit-item",
        ".tracking-category",
    ],
    enter: &[
        ("transform", "translateY(-3px)"),
        ("box-shadow", "var(--shadow-md)"),
        ("transition", "transform 0.2s ease, box-shadow 0.2s ease"),
    ],
    leave: &[("transform", "translateY(0)"), ("box-shadow", "")],
};

/// Emphasis for metric figures
pub const METRIC_HOVER: HoverEffect = HoverEffect {
    selectors: &[
        ".metric-value",
        ".highlight-value",
        ".opp-number",
        ".contract-value",
        ".perf-metric .metric-number",
        ".roi-number",
        ".payback-number",
    ],
    enter: &[
        ("transform", "scale(1.05)"),
        ("transition", "transform 0.2s ease"),
        ("color", "var(--color-primary)"),
    ],
    leave: &[("transform", "scale(1)"), ("color", "")],
};

/// Every bundled hover effect
pub const HOVER_EFFECTS: [HoverEffect; 2] = [CARD_HOVER, METRIC_HOVER];
