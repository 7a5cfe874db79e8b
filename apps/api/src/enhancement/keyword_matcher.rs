//! Keyword Matcher — coarse lexical overlap between a job description and a resume.
//!
//! This is deliberately not semantic matching: no synonyms, no stemming, no
//! paraphrase detection. Keywords are lowercase ASCII-alphabetic tokens longer
//! than a configured threshold, minus a stop-word list.
//!
//! `AppState` holds an `Arc<dyn FitScorer>`; `KeywordMatcher` is the default backend.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_KEYWORD_MIN_LENGTH;

/// Filler and job-posting words that carry no signal.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the",
    "and",
    "for",
    "with",
    "from",
    "that",
    "this",
    "your",
    "you",
    "our",
    "are",
    "will",
    "have",
    "has",
    "any",
    "all",
    "but",
    "about",
    "such",
    "into",
    "also",
    "able",
    "work",
    "working",
    "role",
    "job",
    "responsibilities",
    "requirements",
    "skills",
    "required",
    "years",
    "experience",
    "using",
    "knowledge",
    "good",
    "strong",
    "etc",
    "per",
    "week",
    "month",
    "year",
    "must",
    "should",
    "can",
    "ability",
];

/// Sorted, deduplicated keywords.
pub type KeywordSet = BTreeSet<String>;

/// Tunables for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Tokens must be strictly longer than this many characters.
    pub min_len_exclusive: usize,
    /// Lowercase words never reported as keywords.
    pub stop_words: BTreeSet<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD_MIN_LENGTH, DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl KeywordConfig {
    pub fn new<I, S>(min_len_exclusive: usize, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            min_len_exclusive,
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Default stop-words with a different length threshold.
    pub fn with_min_length(min_len_exclusive: usize) -> Self {
        Self {
            min_len_exclusive,
            ..Self::default()
        }
    }

    fn accepts(&self, token: &str) -> bool {
        token.len() > self.min_len_exclusive && !self.stop_words.contains(token)
    }
}

/// Overlap of JD keywords with resume keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0 – 100
    pub score: u32,
    pub matched: KeywordSet,
    pub missing: KeywordSet,
}

/// Pluggable fit scorer. Implement this to swap backends without touching handlers.
pub trait FitScorer: Send + Sync {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchResult;

    /// Backend label, for transparency in logs.
    fn backend(&self) -> &'static str;
}

/// Keyword matcher bound to one extraction configuration.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    config: KeywordConfig,
}

impl KeywordMatcher {
    pub fn new(config: KeywordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    pub fn compute_match(&self, jd_text: &str, resume_text: &str) -> MatchResult {
        compute_match(jd_text, resume_text, &self.config)
    }
}

impl FitScorer for KeywordMatcher {
    fn score(&self, jd_text: &str, resume_text: &str) -> MatchResult {
        self.compute_match(jd_text, resume_text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Lowercases `text`, splits it on every non-letter and keeps the tokens `config` accepts.
pub fn extract_keywords(text: &str, config: &KeywordConfig) -> KeywordSet {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .filter(|token| config.accepts(token))
        .collect()
}

/// Scores how many JD keywords also appear in the resume.
///
/// `score = round(|matched| / |jd| * 100)`, rounding half to even. A JD with
/// no keywords scores 0 with empty sets.
pub fn compute_match(jd_text: &str, resume_text: &str, config: &KeywordConfig) -> MatchResult {
    let jd_keywords = extract_keywords(jd_text, config);
    if jd_keywords.is_empty() {
        return MatchResult::default();
    }

    let resume_keywords = extract_keywords(resume_text, config);

    let (matched, missing): (KeywordSet, KeywordSet) = jd_keywords
        .iter()
        .cloned()
        .partition(|kw| resume_keywords.contains(kw));

    let ratio = matched.len() as f64 / jd_keywords.len() as f64;
    let score = (ratio * 100.0).round_ties_even() as u32;

    MatchResult {
        score,
        matched,
        missing,
    }
}
