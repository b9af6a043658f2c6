//! Approximate name search.
//!
//! The evaluator only relies on the [`FuzzyMatcher`] trait; the engine
//! shipped here scores records by edit distance against the closest window
//! of the product name.

use catalog_products::ProductRecord;
use distance::levenshtein;

/// One search result: position of the record in the searched slice and its
/// score (0.0 is a perfect match, larger is worse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    pub index: usize,
    pub score: f64,
}

/// Text-similarity engine used for the name filter.
pub trait FuzzyMatcher {
    /// Score `text` against `query`; `None` when it is not a match at all.
    fn score(&self, text: &str, query: &str) -> Option<f64>;

    /// Search the `name` field of every record, best hits first.
    ///
    /// Ties keep dataset order.
    fn search(&self, records: &[ProductRecord], query: &str) -> Vec<FuzzyHit> {
        let mut hits: Vec<FuzzyHit> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                self.score(record.name(), query)
                    .map(|score| FuzzyHit { index, score })
            })
            .collect();
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }
}

/// Default score cut-off: a hit may differ from the query in up to 60% of its
/// characters.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Queries shorter than this only match as substrings. With one or two
/// characters a single edit already rewrites half the query.
pub const MIN_TYPO_QUERY_LEN: usize = 3;

/// Case-insensitive edit-distance matcher.
///
/// The query is compared to every window of the name whose length is within
/// one character of the query's, so partial words and single typos both
/// score well. The score is the best window's Levenshtein distance divided
/// by the query length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditDistanceMatcher {
    threshold: f64,
}

impl Default for EditDistanceMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl EditDistanceMatcher {
    /// `threshold` is clamped into `[0.0, 1.0]`.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: if threshold.is_nan() {
                DEFAULT_THRESHOLD
            } else {
                threshold.clamp(0.0, 1.0)
            },
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl FuzzyMatcher for EditDistanceMatcher {
    fn score(&self, text: &str, query: &str) -> Option<f64> {
        let query = normalize(query);
        let text = normalize(text);
        let q_len = query.chars().count();
        if q_len == 0 {
            return None;
        }
        if text.contains(&query) {
            return Some(0.0);
        }
        if q_len < MIN_TYPO_QUERY_LEN {
            return None;
        }

        let chars: Vec<char> = text.chars().collect();
        let best = if chars.len() <= q_len {
            levenshtein(&query, &text)
        } else {
            best_window_distance(&query, q_len, &chars)
        };

        let score = best as f64 / q_len as f64;
        (score <= self.threshold).then_some(score)
    }
}

fn best_window_distance(query: &str, q_len: usize, chars: &[char]) -> usize {
    let mut best = usize::MAX;
    let min_width = q_len - 1;
    let max_width = (q_len + 1).min(chars.len());
    for width in min_width..=max_width {
        for window in chars.windows(width) {
            let candidate: String = window.iter().collect();
            best = best.min(levenshtein(query, &candidate));
            if best == 0 {
                return 0;
            }
        }
    }
    best
}
