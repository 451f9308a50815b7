use serde::Serialize;
use serde_json::json;

use crate::{
    engine::{RankingEngine, ScoredMatch},
    record::Record,
    text_util,
};

/// Default number of results shown by `search`.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Options applied after ranking.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    /// Maximum number of results, ignored when `all` is set.
    pub count: usize,
    pub all: bool,
    pub min_score: f64,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: DEFAULT_RESULT_COUNT,
            all: false,
            min_score: 0.0,
        }
    }
}

/// An owned search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub score: f64,
    #[serde(flatten)]
    pub record: Record,
}

impl From<ScoredMatch<'_>> for SearchHit {
    fn from(m: ScoredMatch<'_>) -> Self {
        Self {
            rank: m.rank,
            score: m.score,
            record: m.record.clone(),
        }
    }
}

/// Rank, drop results under `min_score`, then keep at most `count`.
pub fn execute_search(
    params: &SearchParams,
    engine: &RankingEngine,
) -> Vec<SearchHit> {
    let limit = if params.all { usize::MAX } else { params.count };

    engine
        .rank(&params.query)
        .into_iter()
        .filter(|m| m.score >= params.min_score)
        .take(limit)
        .enumerate()
        .map(|(i, m)| SearchHit {
            rank: i + 1,
            ..SearchHit::from(m)
        })
        .collect()
}

/// Render results for a terminal.
pub fn format_human(results: &[SearchHit]) -> String {
    if results.is_empty() {
        return "No suggestions found.\n".to_string();
    }

    let mut out = String::new();
    for hit in results {
        let r = &hit.record;
        out.push_str(&format!(
            "{:>3}. [{:.2}] {} {}\n",
            hit.rank,
            hit.score,
            r.icon_or_default(),
            r.title
        ));
        if !r.description.is_empty() {
            out.push_str(&format!("     {}\n", r.description));
        }
        let preview =
            text_util::code_preview(&r.code, text_util::DEFAULT_PREVIEW_LINES);
        for line in preview.lines() {
            out.push_str(&format!("       {line}\n"));
        }
    }
    out.push_str(&format!("\n{} result(s)\n", results.len()));
    out
}

/// Render results as a JSON document.
pub fn format_json(results: &[SearchHit], query: &str) -> String {
    json!({
        "query": query,
        "result_count": results.len(),
        "results": results,
    })
    .to_string()
}

/// The insertion payload of the best result, if any.
pub fn top_code(results: &[SearchHit]) -> Option<&str> {
    results.first().map(|hit| hit.record.code.as_str())
}
