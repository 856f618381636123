use serde::Serialize;

use crate::model::scores::RankedLabel;

/// One autocomplete entry: display text plus the label code it inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSuggestion {
    pub label: String,
    pub value: String,
}

/// Whole percent, rounded down so the display never claims more confidence
/// than an alleviate threshold would grant (50.9% shows as 50%).
pub fn floor_percent(score: f64) -> u32 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    score.floor() as u32
}

pub fn format_suggestion(ranked: &RankedLabel) -> WidgetSuggestion {
    WidgetSuggestion {
        label: format!("{} [{}%]", ranked.label, floor_percent(ranked.score)),
        value: ranked.label.clone(),
    }
}

pub fn format_suggestions(ranked: &[RankedLabel]) -> Vec<WidgetSuggestion> {
    ranked.iter().map(format_suggestion).collect()
}
