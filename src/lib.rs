//! smartsuggest - a small in-memory search engine for code snippets.
//!
//! Snippets are JSON records (`title`, `description`, `code`, optional
//! `icon`) kept in a directory of `.json` files. The whole collection is
//! loaded once and every query rescans it, combining exact and substring
//! matches with either word/phonetic matching or edit-distance similarity.
//!
//! # Quick start
//!
//! ```no_run
//! use smartsuggest::{RankingEngine, loader, loader::TracingSink};
//! use smartsuggest::scoring::StrategyChoice;
//!
//! let corpus = loader::load(std::path::Path::new("snippets"), &TracingSink);
//! let engine = RankingEngine::new(corpus, StrategyChoice::Auto);
//!
//! for m in engine.rank("for loop") {
//!     println!("{:>3}. [{:.2}] {}", m.rank, m.score, m.record.title);
//! }
//! ```

pub mod cli;
pub mod corpus;
pub mod data_dir;
pub mod defaults;
pub mod distance;
pub mod engine;
pub mod error;
pub mod loader;
pub mod phonetic;
pub mod record;
pub mod scoring;
pub mod search;
pub mod service;
pub mod text_util;
pub mod walker;

pub use corpus::{Corpus, CorpusSource};
pub use data_dir::DataDir;
pub use engine::{RankingEngine, ScoredMatch};
pub use error::{Error, Result};
pub use record::Record;
pub use service::SearchService;
