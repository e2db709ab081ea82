use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{SimilarityConfig, AUTOJUNK_MIN_LEN};

/// A run of `size` equal characters starting at `a` in the first sequence and
/// at `b` in the second. Offsets count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Longest-matching-blocks comparison of two strings (Ratcliff/Obershelp).
///
/// The matcher indexes the second sequence once; the first sequence is scanned
/// against that index. Results are deterministic: among equally long matches
/// the one starting earliest in `a` wins, then the one starting earliest in `b`.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each non-popular character of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str, cfg: &SimilarityConfig) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = index_positions(&b, cfg.autojunk);
        Self { a, b, b2j }
    }

    /// Longest block inside `a[alo..ahi]` x `b[blo..bhi]`.
    ///
    /// A block of size 0 at `(alo, blo)` is returned when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular characters never seed a block but may extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// All matching blocks in ascending order, with adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
        }
        blocks.sort_by_key(|block| (block.a, block.b));

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged
    }

    /// Number of characters covered by matching blocks.
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.size).sum()
    }

    /// `2 * M / (len(a) + len(b))` in `[0.0, 1.0]`; 1.0 when both are empty.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}

fn index_positions(b: &[char], autojunk: bool) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let n = b.len();
    if autojunk && n >= AUTOJUNK_MIN_LEN {
        let threshold = n / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= threshold);
    }
    b2j
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(a: &str, b: &str) -> SequenceMatcher {
        SequenceMatcher::new(a, b, &SimilarityConfig::default())
    }

    #[test]
    fn longest_match_prefers_earliest_start_in_a() {
        let m = matcher(" abcd", "abcd abcd");
        assert_eq!(
            m.find_longest_match(0, 5, 0, 9),
            MatchingBlock { a: 0, b: 4, size: 5 }
        );
    }

    #[test]
    fn matching_blocks_cover_both_sides_of_the_gap() {
        let m = matcher("abxcd", "abcd");
        assert_eq!(
            m.matching_blocks(),
            vec![
                MatchingBlock { a: 0, b: 0, size: 2 },
                MatchingBlock { a: 3, b: 2, size: 2 },
            ]
        );
        assert!((m.ratio() - 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn no_common_characters_yields_no_blocks() {
        let m = matcher("abc", "xyz");
        assert!(m.matching_blocks().is_empty());
        assert_eq!(m.ratio(), 0.0);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let m = matcher("café au lait", "café noir");
        let first = m.matching_blocks()[0];
        assert_eq!(first, MatchingBlock { a: 0, b: 0, size: 5 });
    }

    #[test]
    fn popular_characters_cannot_seed_long_blocks() {
        let b = format!("{}abc", "x".repeat(250));
        let a = format!("abc{}", "x".repeat(250));

        let junked = SequenceMatcher::new(&a, &b, &SimilarityConfig::default());
        assert_eq!(junked.matched_len(), 3);
        assert!(junked.ratio() < 0.05);

        let plain = SequenceMatcher::new(&a, &b, &SimilarityConfig::new().with_autojunk(false));
        assert_eq!(plain.matched_len(), 250);
        assert!(plain.ratio() > 0.95);
    }

    #[test]
    fn popularity_heuristic_ignores_short_sequences() {
        let b = "x".repeat(150);
        let m = matcher(&b, &b);
        assert_eq!(m.matched_len(), 150);
    }
}
