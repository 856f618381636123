use super::*;
use crate::model::scores::PointScores;

fn sample_table() -> ScoreTable {
    let mut t = ScoreTable::new();
    t.insert(
        2,
        PointScores::from_entries([("Acrop", 14.0), ("Porit", 40.0)]),
    );
    t.insert(1, PointScores::from_entries([("Porit", 80.0), ("CCA", 10.0)]));
    t.insert(3, PointScores::default());
    t
}

#[test]
fn test_accepts_points_at_or_above_threshold() {
    let report = apply_alleviate(&sample_table(), AlleviateThreshold(40));
    assert!(report.enabled);
    assert_eq!(report.total, 3);
    assert_eq!(report.accepted, 2);

    let points: Vec<_> = report.decisions.iter().map(|d| d.point).collect();
    assert_eq!(points, vec![1, 2, 3]);
    assert_eq!(report.decisions[0].label.as_deref(), Some("Porit"));
    assert!(report.decisions[0].accepted);
    assert_eq!(report.decisions[1].score, Some(40.0));
    assert!(report.decisions[1].accepted);
    assert_eq!(report.decisions[2].label, None);
    assert!(!report.decisions[2].accepted);
}

#[test]
fn test_below_threshold_not_accepted() {
    let report = apply_alleviate(&sample_table(), AlleviateThreshold(70));
    assert_eq!(report.accepted, 1);
    assert!(!report.decisions[1].accepted);
}

#[test]
fn test_threshold_above_99_disables() {
    let report = apply_alleviate(&sample_table(), AlleviateThreshold(100));
    assert!(!report.enabled);
    assert_eq!(report.accepted, 0);
    assert_eq!(report.decisions[0].label.as_deref(), Some("Porit"));
}

#[test]
fn test_top_score_tie_takes_first_entry() {
    let mut t = ScoreTable::new();
    t.insert(7, PointScores::from_entries([("A", 50.0), ("B", 50.0)]));
    let report = apply_alleviate(&t, AlleviateThreshold(50));
    assert_eq!(report.decisions[0].label.as_deref(), Some("A"));
    assert!(report.decisions[0].accepted);
}
