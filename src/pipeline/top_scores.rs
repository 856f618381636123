use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::classifier::ClassifierOutput;
use crate::model::scores::PointId;
use crate::model::vocabulary::LabelVocabulary;

/// Integer score as persisted per point (0..100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredScore {
    pub label: String,
    pub score: u32,
}

/// Session document built from classifier output; readable by `load_session`.
#[derive(Debug, Clone, Serialize)]
pub struct StoredSession {
    pub label_codes: Vec<String>,
    pub machine_suggestions: BTreeMap<PointId, Vec<StoredScore>>,
}

/// Keeps the `n` highest probabilities of `row`. On ties the higher label index
/// comes first, as a reversed ascending argsort orders them.
/// Probabilities become whole percents, half to even.
pub fn top_scores(row: &[f64], vocabulary: &LabelVocabulary, n: usize) -> Vec<StoredScore> {
    let mut order = (0..row.len().min(vocabulary.len())).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        row[b]
            .partial_cmp(&row[a])
            .unwrap_or(Ordering::Equal)
            .then(b.cmp(&a))
    });
    order.truncate(n);

    let codes = vocabulary.codes();
    order
        .into_iter()
        .map(|idx| StoredScore {
            label: codes[idx].clone(),
            score: probability_to_score(row[idx]),
        })
        .collect()
}

pub fn probability_to_score(p: f64) -> u32 {
    let pct = (p * 100.0).round_ties_even();
    if pct.is_nan() || pct <= 0.0 {
        0
    } else {
        pct as u32
    }
}

pub fn build_stored_session(output: &ClassifierOutput, n: usize) -> StoredSession {
    let machine_suggestions = output
        .rows
        .iter()
        .map(|(point, row)| (*point, top_scores(row, &output.vocabulary, n)))
        .collect();
    StoredSession {
        label_codes: output.vocabulary.codes().to_vec(),
        machine_suggestions,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/top_scores.rs"]
mod tests;
