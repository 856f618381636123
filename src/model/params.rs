#[derive(Debug, Clone)]
pub struct SuggestionParams {
    /// Number of ranked suggestions handed to the widget.
    pub top_n: usize,
    /// Evidence multiplier for labels a point did not list among its top scores.
    /// Stands in for roughly 1% confidence.
    pub absent_label_weight: f64,
}

impl SuggestionParams {
    pub fn default_v1() -> Self {
        Self {
            top_n: 5,
            absent_label_weight: 1.0,
        }
    }
}

/// Per-source confidence threshold for auto-accepting machine labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlleviateThreshold(pub u8);

impl AlleviateThreshold {
    /// Thresholds above 99 switch the feature off.
    pub fn is_enabled(self) -> bool {
        self.0 <= 99
    }

    pub fn accepts(self, top_score: f64) -> bool {
        self.is_enabled() && top_score >= f64::from(self.0)
    }
}

/// Number of top classifier scores persisted per point.
pub const SCORES_PER_POINT: usize = 5;
