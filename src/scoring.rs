//! Relevance scoring for a single record.
//!
//! A record's score is the sum of a lexical layer (exact and substring
//! matches, shared by every engine) and a linguistic layer supplied by
//! the engine's [`Scorer`]. Two scorers exist: token overlap with phonetic
//! matching, available with the `linguistic` feature, and a normalized
//! edit-distance fallback.

use std::fmt;

use crate::{distance, phonetic, record::Record, text_util};

pub const TITLE_EXACT: f64 = 100.0;
pub const DESCRIPTION_EXACT: f64 = 80.0;
pub const CODE_CONTAINS: f64 = 60.0;
pub const TITLE_CONTAINS: f64 = 40.0;
pub const DESCRIPTION_CONTAINS: f64 = 20.0;

pub const TITLE_TOKEN: f64 = 15.0;
pub const DESCRIPTION_TOKEN: f64 = 10.0;
pub const TITLE_PHONETIC: f64 = 5.0;
pub const DESCRIPTION_PHONETIC: f64 = 3.0;

pub const TITLE_SIMILARITY: f64 = 10.0;
pub const DESCRIPTION_SIMILARITY: f64 = 5.0;

/// A query prepared once per search.
#[derive(Debug, Clone)]
pub struct Query {
    folded: String,
    phonetic: String,
    #[cfg(feature = "linguistic")]
    tokens: Vec<String>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let folded = text_util::fold(raw);
        let phonetic = phonetic::soundex(&folded);
        #[cfg(feature = "linguistic")]
        let tokens = text_util::tokenize(&folded)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            folded,
            phonetic,
            #[cfg(feature = "linguistic")]
            tokens,
        }
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Phonetic code of the whole query; empty when it has no letters.
    pub fn phonetic(&self) -> &str {
        &self.phonetic
    }

    fn sounds_like(&self, word: &str) -> bool {
        !self.phonetic.is_empty() && phonetic::soundex(word) == self.phonetic
    }
}

/// The linguistic scoring layer.
pub trait Scorer: Send + Sync {
    /// Short identifier shown in status output.
    fn name(&self) -> &'static str;

    fn score(&self, query: &Query, record: &Record) -> f64;
}

/// Exact and substring matches against title, description and code.
pub fn lexical_score(query: &Query, record: &Record) -> f64 {
    let q = query.folded();
    let title = text_util::fold(&record.title);
    let description = text_util::fold(&record.description);
    let code = text_util::fold(&record.code);

    let mut score = 0.0;
    if title == q {
        score += TITLE_EXACT;
    }
    if description == q {
        score += DESCRIPTION_EXACT;
    }
    if code.contains(q) {
        score += CODE_CONTAINS;
    }
    if title.contains(q) {
        score += TITLE_CONTAINS;
    }
    if description.contains(q) {
        score += DESCRIPTION_CONTAINS;
    }
    score
}

/// Total relevance of `record` for `query` under `scorer`.
pub fn score_record(scorer: &dyn Scorer, query: &Query, record: &Record) -> f64 {
    lexical_score(query, record) + scorer.score(query, record)
}

/// Word overlap plus phonetic matching of individual words.
#[cfg(feature = "linguistic")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenPhoneticStrategy;

#[cfg(feature = "linguistic")]
impl Scorer for TokenPhoneticStrategy {
    fn name(&self) -> &'static str {
        "token"
    }

    fn score(&self, query: &Query, record: &Record) -> f64 {
        let title = text_util::fold(&record.title);
        let description = text_util::fold(&record.description);
        let title_tokens = text_util::tokenize(&title);
        let description_tokens = text_util::tokenize(&description);

        let mut score = 0.0;
        for token in &query.tokens {
            if title_tokens.contains(&token.as_str()) {
                score += TITLE_TOKEN;
            }
            if description_tokens.contains(&token.as_str()) {
                score += DESCRIPTION_TOKEN;
            }
        }

        for token in &title_tokens {
            if query.sounds_like(token) {
                score += TITLE_PHONETIC;
            }
        }
        for token in &description_tokens {
            if query.sounds_like(token) {
                score += DESCRIPTION_PHONETIC;
            }
        }
        score
    }
}

/// Whole-field edit-distance similarity plus a phonetic title match.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditDistanceStrategy;

impl Scorer for EditDistanceStrategy {
    fn name(&self) -> &'static str {
        "edit-distance"
    }

    fn score(&self, query: &Query, record: &Record) -> f64 {
        let q = query.folded();
        let title = text_util::fold(&record.title);
        let description = text_util::fold(&record.description);

        let mut score = TITLE_SIMILARITY * distance::similarity(q, &title)
            + DESCRIPTION_SIMILARITY * distance::similarity(q, &description);
        if query.sounds_like(&title) {
            score += TITLE_PHONETIC;
        }
        score
    }
}

/// Which linguistic layer an engine should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyChoice {
    /// Token matching when available, otherwise edit distance.
    #[default]
    Auto,
    /// Token overlap and phonetic word matching.
    Token,
    /// Edit-distance similarity.
    EditDistance,
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Token => "token",
            Self::EditDistance => "edit-distance",
        };
        f.write_str(name)
    }
}

/// Whether the token/phonetic strategy was compiled in.
pub const fn linguistic_available() -> bool {
    cfg!(feature = "linguistic")
}

/// Build the scorer for `choice`.
///
/// Asking for token matching in a build without the `linguistic` feature
/// logs a warning and yields the edit-distance scorer.
pub fn select_scorer(choice: StrategyChoice) -> Box<dyn Scorer> {
    match choice {
        StrategyChoice::EditDistance => Box::new(EditDistanceStrategy),
        #[cfg(feature = "linguistic")]
        StrategyChoice::Auto | StrategyChoice::Token => {
            Box::new(TokenPhoneticStrategy)
        }
        #[cfg(not(feature = "linguistic"))]
        StrategyChoice::Auto => Box::new(EditDistanceStrategy),
        #[cfg(not(feature = "linguistic"))]
        StrategyChoice::Token => {
            tracing::warn!(
                "token matching is not available in this build, using edit distance"
            );
            Box::new(EditDistanceStrategy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn for_loop() -> Record {
        Record::new(
            "For Loop",
            "A standard for loop to iterate over a range of values",
            "for (let i = 0; i < array.length; i++) {}",
            None,
        )
    }

    #[test]
    fn lexical_exact_and_partial_are_additive() {
        let record = Record::new("loop", "loop", "", None);
        let score = lexical_score(&Query::new("LOOP"), &record);
        assert_eq!(
            score,
            TITLE_EXACT + DESCRIPTION_EXACT + TITLE_CONTAINS + DESCRIPTION_CONTAINS
        );
    }

    #[test]
    fn lexical_substring_layers() {
        let score = lexical_score(&Query::new("for"), &for_loop());
        assert_eq!(score, CODE_CONTAINS + TITLE_CONTAINS + DESCRIPTION_CONTAINS);
    }

    #[test]
    fn empty_fields_contribute_nothing() {
        let record = Record::new("Title", "", "", None);
        assert_eq!(lexical_score(&Query::new("zzz"), &record), 0.0);
    }

    #[test]
    fn edit_distance_identical_title() {
        let record = Record::new("loop", "", "", None);
        let query = Query::new("loop");
        let score = EditDistanceStrategy.score(&query, &record);
        // Full title similarity, none for the empty description, plus the
        // phonetic title match.
        assert_eq!(score, TITLE_SIMILARITY + TITLE_PHONETIC);
    }

    #[test]
    fn edit_distance_unrelated_is_zero() {
        let record = Record::new("abcdef", "", "", None);
        let score = EditDistanceStrategy.score(&Query::new("qqq"), &record);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn edit_distance_partial_similarity() {
        let record = Record::new("kitten", "", "", None);
        let score = EditDistanceStrategy.score(&Query::new("sitting"), &record);
        let expected = TITLE_SIMILARITY * (1.0 - 3.0 / 7.0);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn punctuation_only_query_has_no_phonetic_match() {
        let record = Record::new("42", "", "", None);
        let query = Query::new("++");
        assert!(query.phonetic().is_empty());
        assert!(!query.sounds_like("42"));
    }

    #[cfg(feature = "linguistic")]
    #[test]
    fn token_strategy_counts_tokens_and_sounds() {
        let score = TokenPhoneticStrategy.score(&Query::new("for"), &for_loop());
        assert_eq!(
            score,
            TITLE_TOKEN + DESCRIPTION_TOKEN + TITLE_PHONETIC + DESCRIPTION_PHONETIC
        );
    }

    #[cfg(feature = "linguistic")]
    #[test]
    fn token_strategy_phonetic_only() {
        let record = Record::new("Robert Smith", "", "", None);
        let score = TokenPhoneticStrategy.score(&Query::new("rupert"), &record);
        assert_eq!(score, TITLE_PHONETIC);
    }

    #[cfg(feature = "linguistic")]
    #[test]
    fn token_strategy_no_overlap() {
        let record = Record::new("While Loop", "Repeat while true", "", None);
        let score = TokenPhoneticStrategy.score(&Query::new("zebra"), &record);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn total_score_for_exact_title() {
        let record = for_loop();
        let scorer = select_scorer(StrategyChoice::Auto);
        let score = score_record(scorer.as_ref(), &Query::new("for loop"), &record);
        assert!(score >= TITLE_EXACT);
    }

    #[test]
    fn explicit_edit_distance_choice() {
        assert_eq!(
            select_scorer(StrategyChoice::EditDistance).name(),
            "edit-distance"
        );
    }

    #[test]
    fn auto_follows_feature() {
        let expected = if linguistic_available() {
            "token"
        } else {
            "edit-distance"
        };
        assert_eq!(select_scorer(StrategyChoice::Auto).name(), expected);
    }
}
