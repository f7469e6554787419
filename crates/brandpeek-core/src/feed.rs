//! Refresh state for a ranked brand list.
//!
//! Each refresh takes a ticket stamped with a new generation. Only the
//! outcome carrying the latest generation is applied; anything older was
//! superseded by a later refresh and is dropped without touching the state.

use crate::brands::BrandCatalog;
use crate::ranking::{rank_top_brands, RankedBrand};

/// Message shown for any failed load.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load brands. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Loaded(Vec<RankedBrand>),
    Failed(String),
}

/// Proof that a refresh was started, tagged with its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Whether a completed refresh changed the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Superseded,
}

#[derive(Debug, Clone)]
pub struct BrandFeed {
    limit: usize,
    generation: u64,
    state: FeedState,
}

impl BrandFeed {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            generation: 0,
            state: FeedState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// The currently displayed brands; empty unless the last load succeeded.
    #[must_use]
    pub fn brands(&self) -> &[RankedBrand] {
        match &self.state {
            FeedState::Loaded(brands) => brands.as_slice(),
            _ => &[],
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a refresh. Any refresh still in flight is superseded.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = FeedState::Loading;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the refresh identified by `ticket`.
    ///
    /// A successful fetch replaces the list in full with a freshly ranked
    /// one. A failure replaces it with [`LOAD_FAILURE_MESSAGE`]; the error
    /// detail is the caller's to log.
    pub fn complete<E>(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<BrandCatalog, E>,
    ) -> Applied {
        if ticket.generation != self.generation {
            return Applied::Superseded;
        }

        self.state = match outcome {
            Ok(catalog) => FeedState::Loaded(rank_top_brands(&catalog, self.limit)),
            Err(_) => FeedState::Failed(LOAD_FAILURE_MESSAGE.to_owned()),
        };
        Applied::Current
    }
}
