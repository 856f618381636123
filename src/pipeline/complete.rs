use crate::model::vocabulary::LabelVocabulary;

/// Label codes starting with `term`, ignoring case, sorted.
pub fn complete_label(vocabulary: &LabelVocabulary, term: &str) -> Vec<String> {
    let term_lc = term.to_lowercase();
    let mut out = vocabulary
        .iter()
        .filter(|code| code.to_lowercase().starts_with(&term_lc))
        .map(str::to_string)
        .collect::<Vec<_>>();
    out.sort();
    out
}
