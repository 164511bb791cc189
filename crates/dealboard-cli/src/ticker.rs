//! Timer behind the top-deals rotation.
//!
//! The ticker follows the board's group generation: whenever the board
//! replaces its groups, [`RotationTicker::sync`] drops the old interval and
//! schedules a fresh one in the same call, so no tick scheduled against the
//! old groups can fire. Manual steps do not touch the schedule.

use std::time::Duration;

use dealboard_core::Board;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

pub(crate) struct RotationTicker {
    period: Duration,
    interval: Option<Interval>,
    generation: Option<u64>,
}

impl RotationTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
            generation: None,
        }
    }

    /// Re-arms the timer if the board's groups changed since the last sync.
    /// Boards with fewer than two groups leave the timer disarmed.
    pub fn sync(&mut self, board: &Board) {
        if self.generation == Some(board.generation()) {
            return;
        }
        self.generation = Some(board.generation());
        self.interval = None;

        if board.rotation().can_rotate() {
            let mut interval = time::interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            self.interval = Some(interval);
        }
        tracing::debug!(
            generation = board.generation(),
            armed = self.is_armed(),
            "rotation timer rescheduled"
        );
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Completes on the next scheduled advance. Never completes while
    /// disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Cancels any pending advance.
    pub fn cancel(&mut self) {
        self.interval = None;
        self.generation = None;
    }
}
