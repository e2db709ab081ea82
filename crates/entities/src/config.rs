use serde::{Deserialize, Serialize};

/// Extensions to the built-in word lists of [`crate::RuleRecognizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Additional given names that start a PERSON span.
    #[serde(default)]
    pub extra_given_names: Vec<String>,
    /// Additional place names, recognized as GPE.
    #[serde(default)]
    pub extra_locations: Vec<String>,
}

impl RecognizerConfig {
    pub fn with_given_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_given_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_locations<I, S>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_locations.extend(places.into_iter().map(Into::into));
        self
    }
}
