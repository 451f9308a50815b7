//! Asynchronous entry points for callers that own the corpus lifecycle.
//!
//! A [`SearchService`] is created empty, loaded once with
//! [`SearchService::initialize_corpus`] and then queried any number of
//! times, concurrently if needed. Neither call ever fails: loading falls
//! back to built-in records, and a query issued before loading finishes
//! waits briefly and then returns no results.

use std::{path::PathBuf, sync::Arc, time::Duration};

use tokio::sync::{OnceCell, watch};

use crate::{
    engine::RankingEngine,
    loader::{self, TracingSink, WarningSink},
    record::Record,
    scoring::StrategyChoice,
    search::{self, SearchHit, SearchParams},
};

/// How long a query waits for an in-progress load before giving up.
pub const INIT_WAIT: Duration = Duration::from_millis(100);

struct ServiceState {
    engine: OnceCell<RankingEngine>,
    ready: watch::Sender<bool>,
    choice: StrategyChoice,
    sink: Arc<dyn WarningSink>,
}

#[derive(Clone)]
pub struct SearchService {
    state: Arc<ServiceState>,
}

impl SearchService {
    pub fn new(choice: StrategyChoice) -> Self {
        Self::with_sink(choice, Arc::new(TracingSink))
    }

    pub fn with_sink(choice: StrategyChoice, sink: Arc<dyn WarningSink>) -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            state: Arc::new(ServiceState {
                engine: OnceCell::new(),
                ready,
                choice,
                sink,
            }),
        }
    }

    /// Load the corpus from `path`. Only the first call does any work;
    /// concurrent callers wait for that load to finish.
    pub async fn initialize_corpus(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let state = Arc::clone(&self.state);

        self.state
            .engine
            .get_or_init(|| async move {
                let sink = Arc::clone(&state.sink);
                let loaded = tokio::task::spawn_blocking(move || {
                    loader::load(&path, sink.as_ref())
                })
                .await;

                let corpus = match loaded {
                    Ok(corpus) => corpus,
                    Err(e) => {
                        state.sink.warn(&format!(
                            "corpus load task failed: {e}; using built-in snippets"
                        ));
                        loader::builtin_corpus()
                    }
                };
                tracing::info!(
                    "search ready with {} records ({})",
                    corpus.len(),
                    corpus.source()
                );
                RankingEngine::new(corpus, state.choice)
            })
            .await;

        self.state.ready.send_replace(true);
    }

    /// The engine, if loading has completed.
    pub fn engine(&self) -> Option<&RankingEngine> {
        self.state.engine.get()
    }

    /// Ranked results for `params`.
    pub async fn execute(&self, params: &SearchParams) -> Vec<SearchHit> {
        match self.ready_engine().await {
            Some(engine) => search::execute_search(params, engine),
            None => Vec::new(),
        }
    }

    /// Every relevant record for `query`, best first. A blank query
    /// returns the whole corpus.
    pub async fn search(&self, query: &str) -> Vec<Record> {
        let mut params = SearchParams::new(query);
        params.all = true;
        self.execute(&params)
            .await
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    async fn ready_engine(&self) -> Option<&RankingEngine> {
        if let Some(engine) = self.state.engine.get() {
            return Some(engine);
        }

        let mut ready = self.state.ready.subscribe();
        let timed_out =
            tokio::time::timeout(INIT_WAIT, ready.wait_for(|done| *done))
                .await
                .is_err();
        if timed_out {
            tracing::warn!("search requested before snippets finished loading");
        }
        self.state.engine.get()
    }
}
