use std::collections::BTreeMap;

/// Machine scores for a single point, in the order the classifier service sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointScores {
    entries: Vec<(String, f64)>,
}

impl PointScores {
    /// A label listed twice keeps its last score at its first position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for (label, score) in entries {
            let label = label.into();
            match out.entries.iter_mut().find(|(l, _)| *l == label) {
                Some(slot) => slot.1 = score,
                None => out.entries.push((label, score)),
            }
        }
        out
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| *s)
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Highest score, first entry wins on ties.
    pub fn top(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, score) in &self.entries {
            match best {
                Some((_, b)) if *score <= b => {}
                _ => best = Some((label.as_str(), *score)),
            }
        }
        best
    }
}

pub type PointId = u32;

/// Per-point score lookup, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    points: BTreeMap<PointId, PointScores>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point: PointId, scores: PointScores) {
        self.points.insert(point, scores);
    }

    pub fn get(&self, point: PointId) -> Option<&PointScores> {
        self.points.get(&point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ascending point id.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &PointScores)> {
        self.points.iter().map(|(id, s)| (*id, s))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedLabel {
    pub label: String,
    pub score: f64,
}
