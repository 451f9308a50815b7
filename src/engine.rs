use crate::{
    corpus::Corpus,
    record::Record,
    scoring::{self, Query, Scorer, StrategyChoice},
};

/// A record paired with its score for one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a> {
    /// 1-based position in the result list.
    pub rank: usize,
    pub score: f64,
    pub record: &'a Record,
}

/// Ranks the records of a fixed corpus against free-text queries.
///
/// The scorer is chosen once at construction and used for every query.
/// The engine holds no mutable state, so it can be shared between threads
/// and queried concurrently.
pub struct RankingEngine {
    corpus: Corpus,
    scorer: Box<dyn Scorer>,
}

impl RankingEngine {
    pub fn new(corpus: Corpus, choice: StrategyChoice) -> Self {
        Self::with_scorer(corpus, scoring::select_scorer(choice))
    }

    pub fn with_scorer(corpus: Corpus, scorer: Box<dyn Scorer>) -> Self {
        Self { corpus, scorer }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn strategy_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Score every record and return the non-zero ones, best first.
    ///
    /// Records with equal scores keep their corpus order. A blank query
    /// returns the whole corpus in corpus order with a score of zero.
    pub fn rank(&self, query: &str) -> Vec<ScoredMatch<'_>> {
        if query.trim().is_empty() {
            return self
                .corpus
                .iter()
                .enumerate()
                .map(|(i, record)| ScoredMatch {
                    rank: i + 1,
                    score: 0.0,
                    record,
                })
                .collect();
        }

        let query = Query::new(query);
        let mut matches: Vec<ScoredMatch<'_>> = self
            .corpus
            .iter()
            .filter_map(|record| {
                let score =
                    scoring::score_record(self.scorer.as_ref(), &query, record);
                (score > 0.0).then_some(ScoredMatch {
                    rank: 0,
                    score,
                    record,
                })
            })
            .collect();

        // `sort_by` is stable, which keeps ties in corpus order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        for (i, m) in matches.iter_mut().enumerate() {
            m.rank = i + 1;
        }

        tracing::debug!(
            "query {:?} matched {} of {} records",
            query.folded(),
            matches.len(),
            self.corpus.len()
        );
        matches
    }

    /// Records relevant to `query`, best first.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.rank(query).into_iter().map(|m| m.record).collect()
    }
}
