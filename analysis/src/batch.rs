//! Folding many logs into the output tables.
//!
//! Rejections are counted and logged, they never stop a batch. Only an empty
//! input or a source that failed every single fetch is fatal.

use common::{BatchSummary, MatchTables};
use futures::future::BoxFuture;
use rayon::prelude::*;
use serde_json::Value;
use tracing::Instrument;

use crate::pipeline::{ExtractedRow, Pipeline};
use crate::rejection::{Rejection, RejectionKind};

/// Error of a [`LogSource`], opaque to the pipeline.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct FetchError(Box<dyn std::error::Error + Send + Sync>);

impl FetchError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(error.into())
    }
}

/// Resolves a log id to its raw document.
pub trait LogSource: Send + Sync {
    fn fetch<'f, 'own>(&'own self, log_id: String) -> BoxFuture<'f, Result<Value, FetchError>>
    where
        'own: 'f;
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("no log ids to process")]
    EmptyInput,
    #[error("the log source failed for all {attempted} logs")]
    SourceUnavailable { attempted: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub tables: MatchTables,
    pub summary: BatchSummary,
}

impl BatchResult {
    pub fn accepted(&self) -> usize {
        self.summary.accepted
    }
}

/// Accumulates outcomes in the order they are recorded.
#[derive(Debug, Default)]
pub struct Batch {
    tables: MatchTables,
    summary: BatchSummary,
    fetch_failures: usize,
}

impl Batch {
    pub fn record(&mut self, log_id: &str, outcome: Result<ExtractedRow, Rejection>) {
        self.summary.attempted += 1;

        let row = match outcome {
            Ok(row) => row,
            Err(rejection) => {
                tracing::debug!(log_id, kind = %rejection.kind(), "Rejected log: {}", rejection);

                if rejection.kind() == RejectionKind::FetchFailed {
                    self.fetch_failures += 1;
                }
                self.summary.rejected += 1;
                *self
                    .summary
                    .reasons
                    .entry(rejection.kind().label().to_owned())
                    .or_default() += 1;
                return;
            }
        };

        self.summary.accepted += 1;

        let tables = &mut self.tables;
        tables.log_ids.push(log_id.to_owned());
        tables.dates.push(row.date.ymd());
        tables.weekdays.push(row.date.weekday_name().to_owned());
        tables.players.push(row.players);
        tables.gamemodes.push(row.gamemode);
        tables.maps.push(row.map);
        tables.scores.push([row.red_score, row.blue_score]);
        tables.stats.push(row.stats);
    }

    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    pub fn finish(self) -> Result<BatchResult, BatchError> {
        if self.summary.attempted == 0 {
            return Err(BatchError::EmptyInput);
        }
        if self.fetch_failures == self.summary.attempted {
            return Err(BatchError::SourceUnavailable {
                attempted: self.summary.attempted,
            });
        }

        Ok(BatchResult {
            tables: self.tables,
            summary: self.summary,
        })
    }
}

/// Fetches and extracts every log in `log_ids`, one after the other.
#[tracing::instrument(skip_all, fields(logs = log_ids.len()))]
pub async fn run<S>(
    pipeline: &Pipeline,
    source: &S,
    log_ids: &[String],
) -> Result<BatchResult, BatchError>
where
    S: LogSource + ?Sized,
{
    if log_ids.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let total = log_ids.len();
    let mut batch = Batch::default();

    for (index, log_id) in log_ids.iter().enumerate() {
        let span = tracing::debug_span!("Log", id = %log_id);

        let outcome = async {
            tracing::debug!("[{}/{}]", index + 1, total);

            match source.fetch(log_id.clone()).await {
                Ok(document) => pipeline.extract(&document),
                Err(e) => Err(Rejection::FetchFailed {
                    reason: e.to_string(),
                }),
            }
        }
        .instrument(span)
        .await;

        batch.record(log_id, outcome);
    }

    let result = batch.finish()?;
    tracing::info!(
        accepted = result.summary.accepted,
        rejected = result.summary.rejected,
        "Finished batch"
    );

    Ok(result)
}

/// Extracts logs that were already fetched, spread over the rayon pool.
///
/// Results are tagged with their input position and merged back in that
/// order, so the tables come out exactly as [`run`] would produce them.
#[tracing::instrument(skip_all, fields(logs = documents.len()))]
pub fn run_documents(
    pipeline: &Pipeline,
    documents: Vec<(String, Value)>,
) -> Result<BatchResult, BatchError> {
    if documents.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let total = documents.len();
    let parent = tracing::Span::current();
    let mut outcomes: Vec<(usize, String, Result<ExtractedRow, Rejection>)> = documents
        .into_par_iter()
        .enumerate()
        .map(|(index, (log_id, document))| {
            let _span = tracing::debug_span!(parent: &parent, "Log", id = %log_id).entered();
            tracing::debug!("[{}/{}]", index + 1, total);

            let outcome = pipeline.extract(&document);
            (index, log_id, outcome)
        })
        .collect();
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut batch = Batch::default();
    for (_, log_id, outcome) in outcomes {
        batch.record(&log_id, outcome);
    }

    let result = batch.finish()?;
    tracing::info!(
        accepted = result.summary.accepted,
        rejected = result.summary.rejected,
        "Finished batch"
    );

    Ok(result)
}
