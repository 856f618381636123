use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::pipeline::alleviate::{AlleviateDecision, AlleviateReport};
use crate::pipeline::format::WidgetSuggestion;
use crate::pipeline::top_scores::{StoredScore, StoredSession};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("point_suggest_report_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn suggestions() -> Vec<WidgetSuggestion> {
    vec![
        WidgetSuggestion {
            label: "Porit [99%]".to_string(),
            value: "Porit".to_string(),
        },
        WidgetSuggestion {
            label: "Acrop [0%]".to_string(),
            value: "Acrop".to_string(),
        },
    ]
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(45.0), "45");
    assert_eq!(format_score(0.5), "0.500000");
}

#[test]
fn test_suggestions_json_shape() {
    let body = json::render_json(&suggestions()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed[0]["label"], "Porit [99%]");
    assert_eq!(parsed[0]["value"], "Porit");
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_suggestions_text() {
    assert_eq!(
        text::render_suggestions_text(&suggestions()),
        "Porit [99%]\nAcrop [0%]\n"
    );
    assert_eq!(text::render_suggestions_text(&[]), "");
}

#[test]
fn test_alleviate_text() {
    let report = AlleviateReport {
        threshold: 70,
        enabled: true,
        accepted: 1,
        total: 2,
        decisions: vec![
            AlleviateDecision {
                point: 1,
                label: Some("Porit".to_string()),
                score: Some(80.0),
                accepted: true,
            },
            AlleviateDecision {
                point: 2,
                label: None,
                score: None,
                accepted: false,
            },
        ],
    };
    let out = text::render_alleviate_text(&report);
    assert!(out.starts_with("Alleviate threshold: 70% (enabled)\nAccepted: 1/2\n"));
    assert!(out.contains("1\tPorit\t80\tyes\n"));
    assert!(out.contains("2\t-\t-\tno\n"));
}

#[test]
fn test_stored_session_json_uses_string_point_keys() {
    let mut machine_suggestions = BTreeMap::new();
    machine_suggestions.insert(
        12,
        vec![StoredScore {
            label: "Porit".to_string(),
            score: 45,
        }],
    );
    let stored = StoredSession {
        label_codes: vec!["Porit".to_string()],
        machine_suggestions,
    };
    let body = json::render_json(&stored).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["machine_suggestions"]["12"][0]["score"], 45);

    let back: crate::input::session::SessionDoc = serde_json::from_str(&body).unwrap();
    assert_eq!(back.machine_suggestions.unwrap()[&12][0].score, 45.0);

    assert_eq!(
        text::render_stored_session_text(&stored),
        "point\tlabel\tscore\n12\tPorit\t45\n"
    );
}

#[test]
fn test_emit_to_file_creates_parent() {
    let dir = make_temp_dir();
    let path = dir.join("nested").join("out.json");
    emit("[]\n", Some(&path)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
}
