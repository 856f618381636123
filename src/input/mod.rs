use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod classifier;
pub mod open;
pub mod session;

use crate::model::scores::ScoreTable;
use crate::model::vocabulary::LabelVocabulary;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Everything the page knew at load time: the labelset and, when a
/// classifier has run on the image, its per-point top scores.
#[derive(Debug, Clone)]
pub struct Session {
    pub path: PathBuf,
    pub vocabulary: LabelVocabulary,
    pub scores: Option<ScoreTable>,
}

pub fn load_session(path: &Path) -> Result<Session, InputError> {
    let doc = session::read_session_doc(path)?;
    let (vocabulary, scores) = session::build_session(doc)?;

    crate::info!(
        "loaded session {}: labels={}, scored_points={}",
        path.display(),
        vocabulary.len(),
        scores.as_ref().map_or(0, ScoreTable::len)
    );

    Ok(Session {
        path: path.to_path_buf(),
        vocabulary,
        scores,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
