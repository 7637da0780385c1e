//! Latest-request-wins slot for concurrently refreshed views.
//!
//! Each refresh takes a ticket before fetching. When it finishes it may only
//! commit if no newer refresh has started in the meantime and nothing newer
//! has already been committed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Ticket identifying one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every earlier one.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Debug)]
struct Committed<T> {
    ticket: RequestTicket,
    value: Arc<T>,
}

/// Holds the most recent committed result of a view.
#[derive(Debug)]
pub struct LatestView<T> {
    sequence: RequestSequence,
    committed: Mutex<Option<Committed<T>>>,
}

impl<T> Default for LatestView<T> {
    fn default() -> Self {
        Self {
            sequence: RequestSequence::new(),
            committed: Mutex::new(None),
        }
    }
}

impl<T> LatestView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh.
    pub fn begin(&self) -> RequestTicket {
        self.sequence.begin()
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.sequence.is_current(ticket)
    }

    /// Commit a finished refresh and return the value as stored.
    ///
    /// Returns `None` and drops `value` when the ticket has been superseded.
    pub fn commit(&self, ticket: RequestTicket, value: T) -> Option<Arc<T>> {
        let mut slot = self.committed.lock();
        let newer_than_committed = slot.as_ref().map_or(true, |c| ticket > c.ticket);
        if !self.sequence.is_current(ticket) || !newer_than_committed {
            debug!(ticket = ticket.value(), "Dropping superseded result");
            return None;
        }
        let value = Arc::new(value);
        *slot = Some(Committed {
            ticket,
            value: Arc::clone(&value),
        });
        Some(value)
    }

    /// The last committed result, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<T>> {
        self.committed.lock().as_ref().map(|c| Arc::clone(&c.value))
    }
}
