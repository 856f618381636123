use std::collections::BTreeMap;

/// Ordered set of label codes for one session.
///
/// Position in the vocabulary is the tie-break key when two labels end up
/// with the same combined score.
#[derive(Debug, Clone, Default)]
pub struct LabelVocabulary {
    codes: Vec<String>,
    position_by_code: BTreeMap<String, usize>,
}

impl LabelVocabulary {
    /// Builds a vocabulary, returning the first repeated code on failure.
    pub fn new<I, S>(codes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for code in codes {
            let code = code.into();
            if vocab.position_by_code.contains_key(&code) {
                return Err(code);
            }
            vocab.position_by_code.insert(code.clone(), vocab.codes.len());
            vocab.codes.push(code);
        }
        Ok(vocab)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        self.position_by_code.get(code).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}
