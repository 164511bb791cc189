//! The single state record behind the offers display.
//!
//! [`Board`] owns the offer collection, the user's filters, the loading flag
//! and the rotation state. Every mutation goes through [`Board::handle`],
//! [`Board::apply_offers`], [`Board::apply_failure`] or [`Board::tick`], and
//! each of them re-derives the dependent views (breakpoint, top deals,
//! groups, rotation) before returning.

use chrono::{DateTime, Utc};

use crate::offers::Offer;
use crate::partition::partition;
use crate::ranking::{main_view, sort_by_discount, store_names, top_deals, Filter};
use crate::rotation::{Direction, Rotation};
use crate::viewport::Breakpoint;

/// A user action emitted by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    /// `None` clears the supermarket filter.
    SelectStore(Option<String>),
    SetOffersOnly(bool),
    Refresh,
    Step(Direction),
    Resize(u32),
}

/// A data-source read the caller must perform on the board's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub offers_only: bool,
}

/// What the main listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone)]
pub struct Board {
    offers: Vec<Offer>,
    fetched_at: Option<DateTime<Utc>>,
    filter: Filter,
    offers_only: bool,
    loading: bool,
    last_error: Option<String>,
    width: u32,
    breakpoint: Breakpoint,
    top_deals_limit: usize,
    deals: Vec<Offer>,
    groups: Vec<Vec<Offer>>,
    rotation: Rotation,
    generation: u64,
}

impl Board {
    /// An empty board in its start-up state: offers-only mode on and the
    /// loading flag set until the first fetch resolves.
    #[must_use]
    pub fn new(width: u32, top_deals_limit: usize) -> Self {
        Self {
            offers: Vec::new(),
            fetched_at: None,
            filter: Filter::default(),
            offers_only: true,
            loading: true,
            last_error: None,
            width,
            breakpoint: Breakpoint::from_width(width),
            top_deals_limit,
            deals: Vec::new(),
            groups: Vec::new(),
            rotation: Rotation::default(),
            generation: 0,
        }
    }

    /// Marks a fetch as in flight and describes it.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.loading = true;
        FetchRequest {
            offers_only: self.offers_only,
        }
    }

    /// Applies a user intent. Returns a fetch the caller must start, if the
    /// intent needs fresh data.
    pub fn handle(&mut self, intent: Intent) -> Option<FetchRequest> {
        match intent {
            Intent::Search(text) => {
                self.filter.search = text;
                None
            }
            Intent::SelectStore(store) => {
                self.filter.supermarket = store.filter(|s| !s.is_empty());
                None
            }
            Intent::SetOffersOnly(offers_only) => {
                if offers_only == self.offers_only {
                    return None;
                }
                self.offers_only = offers_only;
                Some(self.begin_fetch())
            }
            Intent::Refresh => Some(self.begin_fetch()),
            Intent::Step(direction) => {
                self.rotation.step(direction);
                None
            }
            Intent::Resize(width) => {
                self.resize(width);
                None
            }
        }
    }

    /// Replaces the whole collection with a fresh fetch result.
    ///
    /// The rotation always restarts, even if the new groups happen to equal
    /// the old ones.
    pub fn apply_offers(&mut self, mut offers: Vec<Offer>, fetched_at: DateTime<Utc>) {
        sort_by_discount(&mut offers);
        self.offers = offers;
        self.fetched_at = Some(fetched_at);
        self.loading = false;
        self.last_error = None;
        self.deals = top_deals(&self.offers, self.top_deals_limit);
        self.regroup(true);
    }

    /// Records a failed fetch. The previous collection stays on display.
    pub fn apply_failure(&mut self, reason: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(reason.into());
    }

    /// Timer-driven advance. Returns `true` if the active group changed.
    pub fn tick(&mut self) -> bool {
        self.rotation.advance()
    }

    fn resize(&mut self, width: u32) {
        self.width = width;
        let breakpoint = Breakpoint::from_width(width);
        if breakpoint == self.breakpoint {
            return;
        }
        tracing::debug!(from = %self.breakpoint, to = %breakpoint, width, "breakpoint changed");
        self.breakpoint = breakpoint;
        self.regroup(false);
    }

    /// Re-partitions the top deals. The rotation restarts (and the
    /// generation moves on) when the groups changed or `force` is set.
    fn regroup(&mut self, force: bool) {
        let groups = partition(&self.deals, self.breakpoint.items_per_group());
        if !force && groups == self.groups {
            return;
        }
        self.groups = groups;
        self.rotation.reset(self.groups.len());
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            groups = self.groups.len(),
            "rotation reset"
        );
    }

    /// Offers passing the current filter, highest discount first.
    #[must_use]
    pub fn main_view(&self) -> Vec<&Offer> {
        main_view(&self.offers, &self.filter)
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.offers.iter().any(|o| self.filter.matches(o)) {
            DisplayState::Populated
        } else {
            DisplayState::Empty
        }
    }

    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    #[must_use]
    pub fn top_deals(&self) -> &[Offer] {
        &self.deals
    }

    #[must_use]
    pub fn groups(&self) -> &[Vec<Offer>] {
        &self.groups
    }

    /// The group currently on display, or `None` when the top-deals section
    /// should be hidden.
    #[must_use]
    pub fn active_group(&self) -> Option<&[Offer]> {
        self.groups
            .get(self.rotation.active_index())
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Bumped every time the group sequence is replaced. Timers scheduled
    /// against an older generation are stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Supermarkets available for the store filter.
    #[must_use]
    pub fn stores(&self) -> Vec<String> {
        store_names(&self.offers)
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn offers_only(&self) -> bool {
        self.offers_only
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
