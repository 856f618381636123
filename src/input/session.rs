use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::open::open_maybe_gz;
use crate::model::scores::{PointId, PointScores, ScoreTable};
use crate::model::vocabulary::LabelVocabulary;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreEntry {
    pub label: String,
    pub score: f64,
}

/// On-disk session layout. Point numbers are JSON object keys.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDoc {
    pub label_codes: Vec<String>,
    #[serde(default)]
    pub machine_suggestions: Option<BTreeMap<PointId, Vec<ScoreEntry>>>,
}

pub fn read_session_doc(path: &Path) -> Result<SessionDoc, InputError> {
    let reader = open_maybe_gz(path)?;
    let doc = serde_json::from_reader(reader)?;
    Ok(doc)
}

pub fn build_session(
    doc: SessionDoc,
) -> Result<(LabelVocabulary, Option<ScoreTable>), InputError> {
    let vocabulary = LabelVocabulary::new(doc.label_codes)
        .map_err(|code| InputError::InvalidInput(format!("duplicate label code: {code}")))?;
    if vocabulary.is_empty() {
        crate::warn!("session has an empty label vocabulary");
    }

    let scores = doc
        .machine_suggestions
        .map(|points| build_score_table(points, &vocabulary));

    Ok((vocabulary, scores))
}

fn build_score_table(
    points: BTreeMap<PointId, Vec<ScoreEntry>>,
    vocabulary: &LabelVocabulary,
) -> ScoreTable {
    let mut table = ScoreTable::new();
    let mut unknown_labels = 0usize;
    for (point, entries) in points {
        unknown_labels += entries
            .iter()
            .filter(|e| vocabulary.position(&e.label).is_none())
            .count();
        let scores = PointScores::from_entries(entries.into_iter().map(|e| (e.label, e.score)));
        table.insert(point, scores);
    }
    if unknown_labels > 0 {
        crate::warn!(
            "{} machine score entries reference labels outside the vocabulary",
            unknown_labels
        );
    }
    table
}
