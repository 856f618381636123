use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::open::open_maybe_gz;
use crate::model::scores::PointId;
use crate::model::vocabulary::LabelVocabulary;

/// Raw classifier output: one probability per vocabulary label for each point.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierDoc {
    pub label_codes: Vec<String>,
    pub points: BTreeMap<PointId, Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct ClassifierOutput {
    pub vocabulary: LabelVocabulary,
    pub rows: BTreeMap<PointId, Vec<f64>>,
}

pub fn load_classifier_output(path: &Path) -> Result<ClassifierOutput, InputError> {
    let reader = open_maybe_gz(path)?;
    let doc: ClassifierDoc = serde_json::from_reader(reader)?;
    let out = validate_classifier_doc(doc)?;
    crate::info!(
        "loaded classifier output {}: labels={}, points={}",
        path.display(),
        out.vocabulary.len(),
        out.rows.len()
    );
    Ok(out)
}

pub fn validate_classifier_doc(doc: ClassifierDoc) -> Result<ClassifierOutput, InputError> {
    let vocabulary = LabelVocabulary::new(doc.label_codes)
        .map_err(|code| InputError::InvalidInput(format!("duplicate label code: {code}")))?;
    for (point, row) in &doc.points {
        if row.len() != vocabulary.len() {
            return Err(InputError::InvalidInput(format!(
                "point {} has {} probabilities, expected {}",
                point,
                row.len(),
                vocabulary.len()
            )));
        }
    }
    Ok(ClassifierOutput {
        vocabulary,
        rows: doc.points,
    })
}
