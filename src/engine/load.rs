use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle for one issued load. Sequence numbers start at 1 and only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    pub seq: u64,
}

/// Owner-held teardown flag. Clones share state; once cancelled, stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What happened to a successful fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Replaced the raw list.
    Applied { seq: u64, count: usize },
    /// Dropped: a newer load had already been applied.
    Stale { seq: u64, newest_applied: u64 },
    /// Dropped: the owner was torn down before the result arrived.
    Cancelled { seq: u64 },
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Issues sequence numbers and remembers the newest one applied.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: u64,
    applied: u64,
}

impl LoadSequencer {
    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket { seq: self.issued }
    }

    /// Ok when `ticket` is newer than everything applied so far.
    /// Err carries the newest applied sequence number.
    pub fn admit(&self, ticket: LoadTicket) -> Result<(), u64> {
        if ticket.seq > self.applied {
            Ok(())
        } else {
            Err(self.applied)
        }
    }

    pub fn commit(&mut self, ticket: LoadTicket) {
        self.applied = self.applied.max(ticket.seq);
    }

    pub fn last_issued(&self) -> u64 {
        self.issued
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}
