use crate::pipeline::alleviate::AlleviateReport;
use crate::pipeline::format::WidgetSuggestion;
use crate::pipeline::top_scores::StoredSession;
use crate::report::format_score;

pub fn render_suggestions_text(suggestions: &[WidgetSuggestion]) -> String {
    let mut out = String::new();
    for s in suggestions {
        out.push_str(&s.label);
        out.push('\n');
    }
    out
}

pub fn render_completions_text(codes: &[String]) -> String {
    let mut out = String::new();
    for code in codes {
        out.push_str(code);
        out.push('\n');
    }
    out
}

pub fn render_alleviate_text(report: &AlleviateReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Alleviate threshold: {}% ({})\n",
        report.threshold,
        if report.enabled { "enabled" } else { "disabled" }
    ));
    out.push_str(&format!(
        "Accepted: {}/{}\n",
        report.accepted, report.total
    ));
    out.push_str("point\tlabel\tscore\taccepted\n");
    for d in &report.decisions {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            d.point,
            d.label.as_deref().unwrap_or("-"),
            d.score.map(format_score).unwrap_or_else(|| "-".to_string()),
            if d.accepted { "yes" } else { "no" }
        ));
    }
    out
}

pub fn render_stored_session_text(session: &StoredSession) -> String {
    let mut out = String::new();
    out.push_str("point\tlabel\tscore\n");
    for (point, scores) in &session.machine_suggestions {
        for s in scores {
            out.push_str(&format!("{}\t{}\t{}\n", point, s.label, s.score));
        }
    }
    out
}
