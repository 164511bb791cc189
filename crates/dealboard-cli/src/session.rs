//! The interactive `watch` loop.
//!
//! One task owns the [`Board`], the rotation ticker and the fetch channel.
//! Input lines, fetch outcomes and timer ticks are handled one at a time;
//! after any handler changes the board, the ticker is re-synced before the
//! next event is polled.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use dealboard_core::{AppConfig, Board};
use dealboard_feed::OfferSource;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::fetch::{apply_outcome, FetchOrchestrator, FetchOutcome};
use crate::intent::{parse_command, Command, HELP};
use crate::render::render_board;
use crate::ticker::RotationTicker;

/// What the loop should do after handling an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Render,
    Quiet,
    Quit,
}

pub(crate) struct Session<S> {
    board: Board,
    ticker: RotationTicker,
    fetcher: FetchOrchestrator<S>,
    outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<S> Session<S>
where
    S: OfferSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>, config: &AppConfig, width: u32) -> Self {
        let (fetcher, outcomes) = FetchOrchestrator::new(source);
        Self {
            board: Board::new(width, config.top_deals_limit),
            ticker: RotationTicker::new(Duration::from_secs(config.rotation_interval_secs)),
            fetcher,
            outcomes,
        }
    }

    /// Runs until `quit` or end of input. The initial fetch starts
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R, W>(mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let request = self.board.begin_fetch();
        self.fetcher.start(request);
        draw(&self.board, out)?;

        let mut lines = input.lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle_line(&line, out)? {
                        Flow::Quit => break,
                        Flow::Render => draw(&self.board, out)?,
                        Flow::Quiet => {}
                    }
                }
                Some(outcome) = self.outcomes.recv() => {
                    self.handle_outcome(outcome);
                    draw(&self.board, out)?;
                }
                () = self.ticker.tick() => {
                    if self.handle_tick() {
                        draw(&self.board, out)?;
                    }
                }
            }
        }

        self.ticker.cancel();
        tracing::debug!("watch session ended");
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Quiet),
            Err(err) => {
                writeln!(out, "{err:#}")?;
                return Ok(Flow::Quiet);
            }
        };

        match command {
            Command::Quit => Ok(Flow::Quit),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(Flow::Quiet)
            }
            Command::Intent(intent) => {
                if let Some(request) = self.board.handle(intent) {
                    self.fetcher.start(request);
                }
                self.ticker.sync(&self.board);
                Ok(Flow::Render)
            }
        }
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) {
        apply_outcome(&mut self.board, outcome);
        self.ticker.sync(&self.board);
    }

    fn handle_tick(&mut self) -> bool {
        self.board.tick()
    }
}

fn draw<W: Write>(board: &Board, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", render_board(board))?;
    out.flush()
}
