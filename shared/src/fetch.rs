//! Per-screen remote list state.
//!
//! A `RemoteList` moves `Idle -> Loading -> Success | Failure`. Every load
//! is stamped with a fresh `Ticket`; a response is applied only while its
//! ticket is the one in flight, so answers that arrive after the screen was
//! closed or reloaded are dropped without touching state.
use serde::{Deserialize, Serialize};

use crate::api::ListEndpoint;
use crate::capabilities::HttpResult;
use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListState<T> {
    Idle,
    Loading,
    Success(Vec<T>),
    Failure(FetchError),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// What `RemoteList::settle` did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Success { count: usize },
    Failure { code: &'static str, status: Option<u16> },
    /// Ticket was not the one in flight; state untouched.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteList<T> {
    state: ListState<T>,
    issued: u64,
    in_flight: Option<Ticket>,
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self {
            state: ListState::Idle,
            issued: 0,
            in_flight: None,
        }
    }
}

impl<T> RemoteList<T> {
    /// Starts a load when the list is idle. Reopening a screen that already
    /// has a load in flight or a result does nothing.
    pub fn activate(&mut self) -> Option<Ticket> {
        matches!(self.state, ListState::Idle).then(|| self.begin())
    }

    /// Always starts a fresh load, superseding any request in flight.
    pub fn reload(&mut self) -> Ticket {
        self.begin()
    }

    pub fn deactivate(&mut self) {
        self.in_flight = None;
        self.state = ListState::Idle;
    }

    /// Applies an HTTP outcome for `ticket`.
    ///
    /// Transport errors win over status, status over body; the body goes
    /// through `E::decode`, where one bad item fails the whole batch.
    pub fn settle<E>(&mut self, ticket: Ticket, result: HttpResult) -> Settled
    where
        E: ListEndpoint<Item = T>,
    {
        if !self.is_current(ticket) {
            return Settled::Stale;
        }

        let outcome = match result {
            Err(e) => Err(FetchError::from(e)),
            Ok(response) if !response.is_success() => Err(FetchError::HttpStatus {
                status: response.status(),
            }),
            Ok(response) => E::decode(response.body()),
        };
        self.finish(outcome)
    }

    /// Fails the load for `ticket` without a response, e.g. when no valid
    /// request could be built.
    pub fn fail(&mut self, ticket: Ticket, error: FetchError) -> Settled {
        if !self.is_current(ticket) {
            return Settled::Stale;
        }
        self.finish(Err(error))
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Items of a successful load; empty in every other state.
    pub fn items(&self) -> &[T] {
        match &self.state {
            ListState::Success(items) => items,
            _ => &[],
        }
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        self.state = ListState::Loading;
        ticket
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.in_flight == Some(ticket) && matches!(self.state, ListState::Loading)
    }

    fn finish(&mut self, outcome: Result<Vec<T>, FetchError>) -> Settled {
        self.in_flight = None;
        match outcome {
            Ok(items) => {
                let count = items.len();
                self.state = ListState::Success(items);
                Settled::Success { count }
            }
            Err(error) => {
                let settled = Settled::Failure {
                    code: error.code(),
                    status: error.status(),
                };
                self.state = ListState::Failure(error);
                settled
            }
        }
    }
}
