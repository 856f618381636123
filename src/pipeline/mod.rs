pub mod alleviate;
pub mod combine;
pub mod complete;
pub mod format;
pub mod top_scores;

use crate::input::Session;
use crate::model::params::SuggestionParams;
use crate::model::scores::PointId;
use combine::{SuggestError, combine};
use format::{WidgetSuggestion, format_suggestions};

/// Widget entries for the selected points. A session without machine scores
/// yields no suggestions.
pub fn suggest_for_selection(
    session: &Session,
    selection: &[PointId],
    params: &SuggestionParams,
) -> Result<Vec<WidgetSuggestion>, SuggestError> {
    let Some(table) = &session.scores else {
        crate::info!("session has no machine suggestions; nothing to rank");
        return Ok(Vec::new());
    };
    let ranked = combine(selection, &session.vocabulary, table, params)?;
    Ok(format_suggestions(&ranked))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
