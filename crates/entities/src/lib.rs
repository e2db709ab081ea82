//! docmatch entity layer.
//!
//! Finds people, dates and locations in a text and reduces them to the three
//! [`KeyFeatures`] reported with every text match.
//!
//! Recognition sits behind the [`EntityRecognizer`] trait: it only has to
//! produce `(span, label)` pairs in document order. Selection is fixed: the
//! first PERSON becomes `name`, the first DATE becomes `date`, and the first
//! GPE or LOC becomes `location`. There is no ranking, coreference or
//! disambiguation beyond that.
//!
//! [`RuleRecognizer`] is the bundled engine. It is deterministic and needs no
//! model files; see its docs for the rules it applies.
//!
//! ```
//! use entities::{extract_key_features, RuleRecognizer};
//!
//! let features = extract_key_features(
//!     "John Smith visited Paris on June 1, 2023.",
//!     &RuleRecognizer::new(),
//! );
//! assert_eq!(features.name.as_deref(), Some("John Smith"));
//! assert_eq!(features.date.as_deref(), Some("June 1, 2023"));
//! assert_eq!(features.location.as_deref(), Some("Paris"));
//! ```

mod config;
mod dates;
pub mod gazetteer;
mod recognizer;
mod rules;
mod types;

pub use crate::config::RecognizerConfig;
pub use crate::recognizer::{extract_key_features, select_key_features, EntityRecognizer};
pub use crate::rules::RuleRecognizer;
pub use crate::types::{Entity, EntityLabel, KeyFeatures};
