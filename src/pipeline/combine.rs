//! Multi-point label suggestion fusion.
//!
//! All selected points are assumed to carry the same true label. Each point's
//! machine scores are treated as independent likelihoods, multiplied label by
//! label, and renormalised to a 0..100 scale after every point.

use std::cmp::Ordering;

use thiserror::Error;

use crate::model::params::SuggestionParams;
use crate::model::scores::{PointId, PointScores, RankedLabel, ScoreTable};
use crate::model::vocabulary::LabelVocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("point {0} has no machine scores")]
    UnknownPoint(PointId),
}

/// Ranked suggestions for `selection`, best first, at most `params.top_n`.
///
/// Ties are broken by vocabulary position. For a single point, labels missing
/// from the vocabulary rank after vocabulary labels on ties, in entry order.
pub fn combine(
    selection: &[PointId],
    vocabulary: &LabelVocabulary,
    table: &ScoreTable,
    params: &SuggestionParams,
) -> Result<Vec<RankedLabel>, SuggestError> {
    let mut keyed = match selection {
        [] => return Ok(Vec::new()),
        [point] => single_point_ranking(lookup(table, *point)?, vocabulary),
        _ => {
            let fused = fuse_points(selection, vocabulary, table, params.absent_label_weight)?;
            vocabulary
                .iter()
                .zip(fused)
                .enumerate()
                .map(|(pos, (label, score))| {
                    (
                        pos,
                        RankedLabel {
                            label: label.to_string(),
                            score,
                        },
                    )
                })
                .collect()
        }
    };

    keyed.sort_by(|(ka, a), (kb, b)| descending_score(a.score, b.score).then(ka.cmp(kb)));
    keyed.truncate(params.top_n);

    crate::debug!(
        "combined {} point(s) into {} suggestion(s)",
        selection.len(),
        keyed.len()
    );

    Ok(keyed.into_iter().map(|(_, ranked)| ranked).collect())
}

/// Fused scores in vocabulary order; empty when the vocabulary is empty.
pub fn fuse_points(
    selection: &[PointId],
    vocabulary: &LabelVocabulary,
    table: &ScoreTable,
    absent_label_weight: f64,
) -> Result<Vec<f64>, SuggestError> {
    if vocabulary.is_empty() {
        return Ok(Vec::new());
    }
    let points = selection
        .iter()
        .map(|&p| lookup(table, p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut running = vec![100.0 / vocabulary.len() as f64; vocabulary.len()];
    for scores in points {
        fold_point(&mut running, vocabulary, scores, absent_label_weight);
    }
    Ok(running)
}

/// Multiplies one point's evidence into `running`, then renormalises.
pub fn fold_point(
    running: &mut [f64],
    vocabulary: &LabelVocabulary,
    scores: &PointScores,
    absent_label_weight: f64,
) {
    for (slot, label) in running.iter_mut().zip(vocabulary.iter()) {
        *slot *= scores.get(label).unwrap_or(absent_label_weight);
    }
    renormalize(running);
}

/// Rescales so the values sum to 100. An all-zero vector is left as is.
pub fn renormalize(running: &mut [f64]) {
    let sum: f64 = running.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        crate::warn!("running scores sum to {}; skipping renormalisation", sum);
        return;
    }
    let factor = sum / 100.0;
    for v in running.iter_mut() {
        *v /= factor;
    }
}

fn lookup(table: &ScoreTable, point: PointId) -> Result<&PointScores, SuggestError> {
    table.get(point).ok_or(SuggestError::UnknownPoint(point))
}

fn single_point_ranking(
    scores: &PointScores,
    vocabulary: &LabelVocabulary,
) -> Vec<(usize, RankedLabel)> {
    scores
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, (label, score))| {
            let key = vocabulary
                .position(label)
                .unwrap_or(vocabulary.len() + idx);
            (
                key,
                RankedLabel {
                    label: label.clone(),
                    score: *score,
                },
            )
        })
        .collect()
}

fn descending_score(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/combine.rs"]
mod tests;
