use serde::Serialize;

use crate::model::params::AlleviateThreshold;
use crate::model::scores::{PointId, ScoreTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlleviateDecision {
    pub point: PointId,
    pub label: Option<String>,
    pub score: Option<f64>,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlleviateReport {
    pub threshold: u8,
    pub enabled: bool,
    pub accepted: usize,
    pub total: usize,
    pub decisions: Vec<AlleviateDecision>,
}

/// Marks each point whose top machine score reaches the threshold as
/// auto-accepted. Points are visited in ascending id order.
pub fn apply_alleviate(table: &ScoreTable, threshold: AlleviateThreshold) -> AlleviateReport {
    if !threshold.is_enabled() {
        crate::info!(
            "alleviate threshold {} is above 99; auto-accept disabled",
            threshold.0
        );
    }
    if table.is_empty() {
        crate::debug!("no scored points to alleviate");
    }

    let decisions = table
        .iter()
        .map(|(point, scores)| match scores.top() {
            Some((label, score)) => AlleviateDecision {
                point,
                label: Some(label.to_string()),
                score: Some(score),
                accepted: threshold.accepts(score),
            },
            None => AlleviateDecision {
                point,
                label: None,
                score: None,
                accepted: false,
            },
        })
        .collect::<Vec<_>>();

    let accepted = decisions.iter().filter(|d| d.accepted).count();
    AlleviateReport {
        threshold: threshold.0,
        enabled: threshold.is_enabled(),
        accepted,
        total: decisions.len(),
        decisions,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/alleviate.rs"]
mod tests;
