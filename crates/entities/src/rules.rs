use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RecognizerConfig;
use crate::dates::find_dates;
use crate::gazetteer::{
    GEOPOLITICAL, GIVEN_NAMES, HONORIFICS, NATURAL_LOCATIONS, ORG_SUFFIXES, PARTICLES,
};
use crate::recognizer::EntityRecognizer;
use crate::types::{Entity, EntityLabel};

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}[\p{L}\p{M}'’\-]*").expect("word pattern is valid"));

/// Longest PERSON span, in words, started by a given name.
const MAX_NAME_WORDS: usize = 4;

/// Deterministic, dictionary-driven entity recognizer.
///
/// - DATE: regular expressions over numeric and written date forms.
/// - GPE / LOC: gazetteer lookups over runs of capitalized words, longest first.
/// - ORG: capitalized runs that end in a corporate suffix ("Acme Labs").
/// - PERSON: capitalized runs introduced by an honorific or a known given name.
///
/// Capitalized runs never cross punctuation or line breaks, so "Paris. John"
/// yields two runs.
#[derive(Debug, Clone)]
pub struct RuleRecognizer {
    places: HashMap<String, EntityLabel>,
    given_names: HashSet<String>,
    max_place_words: usize,
}

impl RuleRecognizer {
    pub fn new() -> Self {
        Self::from_config(&RecognizerConfig::default())
    }

    pub fn from_config(cfg: &RecognizerConfig) -> Self {
        let mut places: HashMap<String, EntityLabel> = HashMap::new();
        for name in NATURAL_LOCATIONS {
            places.insert((*name).to_string(), EntityLabel::Loc);
        }
        for name in GEOPOLITICAL
            .iter()
            .map(|name| name.to_string())
            .chain(cfg.extra_locations.iter().map(|name| name.trim().to_string()))
        {
            if !name.is_empty() {
                places.insert(name, EntityLabel::Gpe);
            }
        }

        let given_names = GIVEN_NAMES
            .iter()
            .map(|name| name.to_string())
            .chain(cfg.extra_given_names.iter().map(|name| name.trim().to_string()))
            .filter(|name| !name.is_empty())
            .collect();

        let max_place_words = places
            .keys()
            .map(|name| name.split_whitespace().count())
            .max()
            .unwrap_or(1);

        Self {
            places,
            given_names,
            max_place_words,
        }
    }

    /// Longest gazetteer entry starting at `run[at]`, as (word count, label).
    fn place_at(&self, run: &[Word<'_>], at: usize) -> Option<(usize, EntityLabel)> {
        let longest = self.max_place_words.min(run.len() - at);
        (1..=longest).rev().find_map(|len| {
            let words = &run[at..at + len];
            if is_particle(words[0].text) || is_particle(words[len - 1].text) {
                return None;
            }
            let key = words
                .iter()
                .map(|word| word.text)
                .collect::<Vec<_>>()
                .join(" ");
            self.places.get(&key).map(|label| (len, label.clone()))
        })
    }

    /// Split a run into places and the name-like remainders between them.
    fn classify_run(&self, text: &str, run: &[Word<'_>], out: &mut Vec<Entity>) {
        let mut rest_start = 0;
        let mut at = 0;
        while at < run.len() {
            match self.place_at(run, at) {
                Some((len, label)) => {
                    self.classify_names(text, &run[rest_start..at], out);
                    out.push(Entity::from_span(
                        text,
                        run[at].start,
                        run[at + len - 1].end,
                        label,
                    ));
                    at += len;
                    rest_start = at;
                }
                None => at += 1,
            }
        }
        self.classify_names(text, &run[rest_start..], out);
    }

    fn classify_names(&self, text: &str, words: &[Word<'_>], out: &mut Vec<Entity>) {
        let words = trim_particles(words);
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return;
        };

        if words.len() >= 2 && ORG_SUFFIXES.contains(&last.bare()) {
            out.push(Entity::from_span(text, first.start, last.end, EntityLabel::Org));
            return;
        }

        if HONORIFICS.contains(&first.bare()) {
            let named = trim_particles(&words[1..]);
            if let (Some(head), Some(tail)) = (named.first(), named.last()) {
                out.push(Entity::from_span(text, head.start, tail.end, EntityLabel::Person));
            }
            return;
        }

        // "Dear John Smith": the name may follow other capitalized words.
        if let Some(offset) = words
            .iter()
            .position(|word| self.given_names.contains(word.text))
        {
            let named = trim_particles(&words[offset..(offset + MAX_NAME_WORDS).min(words.len())]);
            if let (Some(head), Some(tail)) = (named.first(), named.last()) {
                out.push(Entity::from_span(text, head.start, tail.end, EntityLabel::Person));
            }
        }
    }
}

impl Default for RuleRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RuleRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let dates = find_dates(text);
        let mut entities: Vec<Entity> = dates
            .iter()
            .map(|&(start, end)| Entity::from_span(text, start, end, EntityLabel::Date))
            .collect();

        let words: Vec<Word<'_>> = tokenize(text)
            .into_iter()
            .filter(|word| {
                !dates
                    .iter()
                    .any(|&(start, end)| word.start < end && start < word.end)
            })
            .collect();

        for run in capitalized_runs(text, &words) {
            self.classify_run(text, &run, &mut entities);
        }

        entities.sort_by_key(|entity| (entity.start, entity.end));
        entities
    }
}

/// A letter-initial word; `end` includes the trailing dot of titles and initials.
#[derive(Debug, Clone, Copy)]
struct Word<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Word<'t> {
    fn bare(&self) -> &'t str {
        self.text.trim_end_matches('.')
    }

    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

fn tokenize(text: &str) -> Vec<Word<'_>> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| {
            let mut end = m.end();
            let raw = m.as_str();
            let abbreviated = HONORIFICS.contains(&raw)
                || (raw.chars().count() == 1 && raw.chars().all(char::is_uppercase));
            if abbreviated && text[end..].starts_with('.') {
                end += 1;
            }
            Word {
                text: &text[m.start()..end],
                start: m.start(),
                end,
            }
        })
        .collect()
}

fn capitalized_runs<'t>(text: &str, words: &[Word<'t>]) -> Vec<Vec<Word<'t>>> {
    let mut runs = Vec::new();
    let mut current: Vec<Word<'t>> = Vec::new();

    for word in words {
        let continues = current
            .last()
            .is_some_and(|prev| is_inline_gap(&text[prev.end..word.start]));
        if !continues {
            flush_run(&mut current, &mut runs);
        }

        if word.is_capitalized() {
            current.push(*word);
        } else if continues && is_particle(word.text) {
            current.push(*word);
        } else {
            flush_run(&mut current, &mut runs);
        }
    }
    flush_run(&mut current, &mut runs);
    runs
}

fn flush_run<'t>(current: &mut Vec<Word<'t>>, runs: &mut Vec<Vec<Word<'t>>>) {
    while current.last().is_some_and(|word| is_particle(word.text)) {
        current.pop();
    }
    if !current.is_empty() {
        runs.push(std::mem::take(current));
    }
}

fn trim_particles<'a, 't>(words: &'a [Word<'t>]) -> &'a [Word<'t>] {
    let start = words
        .iter()
        .position(|word| !is_particle(word.text))
        .unwrap_or(words.len());
    let end = words
        .iter()
        .rposition(|word| !is_particle(word.text))
        .map_or(start, |idx| idx + 1);
    &words[start..end]
}

fn is_particle(word: &str) -> bool {
    PARTICLES.contains(&word)
}

fn is_inline_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t' || c == '\u{a0}')
}
