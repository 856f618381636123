use super::*;
use crate::input::classifier::{ClassifierDoc, validate_classifier_doc};

fn vocab(codes: &[&str]) -> LabelVocabulary {
    LabelVocabulary::new(codes.iter().copied()).unwrap()
}

#[test]
fn test_keeps_highest_probabilities() {
    let v = vocab(&["a", "b", "c", "d"]);
    let out = top_scores(&[0.1, 0.5, 0.2, 0.2], &v, 3);
    assert_eq!(
        out,
        vec![
            StoredScore {
                label: "b".to_string(),
                score: 50
            },
            StoredScore {
                label: "d".to_string(),
                score: 20
            },
            StoredScore {
                label: "c".to_string(),
                score: 20
            },
        ]
    );
}

#[test]
fn test_equal_probabilities_prefer_higher_label_index() {
    let v = vocab(&["a", "b", "c"]);
    let out = top_scores(&[0.25, 0.25, 0.5], &v, 2);
    let labels: Vec<_> = out.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["c", "b"]);
}

#[test]
fn test_fewer_labels_than_n() {
    let v = vocab(&["a", "b"]);
    let out = top_scores(&[0.3, 0.7], &v, 5);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].label, "b");
}

#[test]
fn test_probability_rounds_half_to_even() {
    assert_eq!(probability_to_score(0.125), 12);
    assert_eq!(probability_to_score(0.375), 38);
    assert_eq!(probability_to_score(1.0), 100);
    assert_eq!(probability_to_score(-0.2), 0);
}

#[test]
fn test_stored_session_covers_every_point() {
    let mut points = BTreeMap::new();
    points.insert(1, vec![0.9, 0.1]);
    points.insert(4, vec![0.25, 0.75]);
    let output = validate_classifier_doc(ClassifierDoc {
        label_codes: vec!["Porit".to_string(), "Acrop".to_string()],
        points,
    })
    .unwrap();

    let stored = build_stored_session(&output, 1);
    assert_eq!(stored.label_codes, vec!["Porit", "Acrop"]);
    assert_eq!(stored.machine_suggestions.len(), 2);
    assert_eq!(stored.machine_suggestions[&1][0].label, "Porit");
    assert_eq!(stored.machine_suggestions[&4][0].score, 75);
}

#[test]
fn test_row_length_mismatch_rejected() {
    let mut points = BTreeMap::new();
    points.insert(1, vec![0.9]);
    let err = validate_classifier_doc(ClassifierDoc {
        label_codes: vec!["Porit".to_string(), "Acrop".to_string()],
        points,
    })
    .unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}
