//! Fetch orchestration: one data-source read per request, results delivered
//! back to the session over a channel.
//!
//! Reads are fire-and-forget. Overlapping reads are not de-duplicated; the
//! session applies outcomes in arrival order, so the last one to finish wins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dealboard_core::{Board, FetchRequest, Offer};
use dealboard_feed::{FeedError, OfferSource};
use tokio::sync::mpsc;

/// The result of one read, tagged with what was asked for.
#[derive(Debug)]
pub(crate) struct FetchOutcome {
    pub request: FetchRequest,
    pub result: Result<Vec<Offer>, FeedError>,
    pub finished_at: DateTime<Utc>,
}

pub(crate) struct FetchOrchestrator<S> {
    source: Arc<S>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
}

impl<S> FetchOrchestrator<S>
where
    S: OfferSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { source, tx }, rx)
    }

    /// Spawns the read described by `request`.
    pub fn start(&self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tracing::debug!(offers_only = request.offers_only, "starting fetch");
        tokio::spawn(async move {
            let result = source.fetch_offers(request.offers_only).await;
            let outcome = FetchOutcome {
                request,
                result,
                finished_at: Utc::now(),
            };
            // A closed receiver means the session has ended.
            if tx.send(outcome).is_err() {
                tracing::debug!("fetch finished after session ended");
            }
        });
    }
}

/// Folds a finished read into the board. Failures keep the previous offers.
pub(crate) fn apply_outcome(board: &mut Board, outcome: FetchOutcome) {
    match outcome.result {
        Ok(offers) => {
            tracing::info!(
                offers_only = outcome.request.offers_only,
                offers = offers.len(),
                deals = offers.iter().filter(|o| o.is_deal()).count(),
                "offers refreshed"
            );
            board.apply_offers(offers, outcome.finished_at);
        }
        Err(err) => {
            tracing::warn!(
                offers_only = outcome.request.offers_only,
                error = %err,
                "fetch failed; keeping previous offers"
            );
            board.apply_failure(err.to_string());
        }
    }
}

/// Runs a single read to completion and returns the populated board.
///
/// # Errors
///
/// Returns the data-source error when the read fails.
pub(crate) async fn fetch_board<S: OfferSource + Sync>(
    source: &S,
    offers_only: bool,
    width: u32,
    top_deals_limit: usize,
) -> anyhow::Result<Board> {
    let mut board = Board::new(width, top_deals_limit);
    if !offers_only {
        board.handle(dealboard_core::Intent::SetOffersOnly(false));
    }
    let request = board.begin_fetch();
    let offers = source.fetch_offers(request.offers_only).await?;
    board.apply_offers(offers, Utc::now());
    Ok(board)
}
