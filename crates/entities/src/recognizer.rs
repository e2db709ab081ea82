use crate::types::{Entity, EntityLabel, KeyFeatures};

/// Anything that can turn text into labelled spans.
///
/// Implementations must return entities in document order. A pretrained
/// sequence model, a remote NER service, or [`crate::RuleRecognizer`] all fit.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// First PERSON, first DATE and first GPE-or-LOC of an ordered entity list.
pub fn select_key_features(entities: &[Entity]) -> KeyFeatures {
    KeyFeatures {
        name: first_text(entities, |label| *label == EntityLabel::Person),
        date: first_text(entities, |label| *label == EntityLabel::Date),
        location: first_text(entities, EntityLabel::is_location),
    }
}

fn first_text(entities: &[Entity], pred: impl Fn(&EntityLabel) -> bool) -> Option<String> {
    entities
        .iter()
        .find(|entity| pred(&entity.label))
        .map(|entity| entity.text.clone())
}

/// Run `recognizer` over `text` and keep the first person, date and location.
pub fn extract_key_features(text: &str, recognizer: &dyn EntityRecognizer) -> KeyFeatures {
    if text.is_empty() {
        return KeyFeatures::default();
    }
    select_key_features(&recognizer.recognize(text))
}
