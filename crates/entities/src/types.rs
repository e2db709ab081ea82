use std::fmt;

use serde::{Deserialize, Serialize};

/// Entity category, named after the spaCy/OntoNotes label set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// People, including fictional.
    Person,
    /// Absolute or relative dates and periods.
    Date,
    /// Countries, cities, states.
    Gpe,
    /// Non-GPE locations: mountain ranges, bodies of water, regions.
    Loc,
    /// Companies, agencies, institutions.
    Org,
    /// Any label produced by an external engine that docmatch does not select on.
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Org => "ORG",
            EntityLabel::Other(label) => label.as_str(),
        }
    }

    /// GPE and LOC both count as a location for feature selection.
    pub fn is_location(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc)
    }
}

impl From<&str> for EntityLabel {
    fn from(value: &str) -> Self {
        match value {
            "PERSON" => EntityLabel::Person,
            "DATE" => EntityLabel::Date,
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "ORG" => EntityLabel::Org,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityLabel {
    fn from(value: String) -> Self {
        EntityLabel::from(value.as_str())
    }
}

impl From<EntityLabel> for String {
    fn from(value: EntityLabel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized span. `start..end` is a byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    /// Build an entity from a byte range of `source`.
    pub(crate) fn from_span(source: &str, start: usize, end: usize, label: EntityLabel) -> Self {
        Self::new(&source[start..end], label, start, end)
    }
}

/// The three features reported for a text document.
///
/// Each field holds the first span of its category in document order, or
/// `None` when the text has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFeatures {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

impl KeyFeatures {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.date.is_none() && self.location.is_none()
    }
}
