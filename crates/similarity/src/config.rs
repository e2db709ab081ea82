use serde::{Deserialize, Serialize};

/// Sequence length at which the popularity heuristic starts to apply.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Tuning for [`crate::SequenceMatcher`].
///
/// The scorer applies no case or whitespace normalization; callers that want
/// it must normalize before scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimilarityConfig {
    /// Treat very frequent characters of the second sequence as "popular".
    ///
    /// Once the second sequence holds at least [`AUTOJUNK_MIN_LEN`] characters,
    /// every character that occurs more than `len / 100 + 1` times may not seed
    /// a matching block (blocks can still grow across it). Enabled by default.
    #[serde(default = "default_autojunk")]
    pub autojunk: bool,
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            autojunk: default_autojunk(),
        }
    }
}

fn default_autojunk() -> bool {
    true
}
