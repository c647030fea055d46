//! Cancellable gravity timer.
//!
//! The timer never reads a clock; callers pass a monotonic millisecond
//! timestamp. Every `arm` or `cancel` starts a new generation, and each due
//! tick is handed out as a [`TickTicket`] stamped with the generation it was
//! issued under. A ticket from an older generation is stale and must be
//! dropped by whoever delivers it.

/// One due gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTicket {
    generation: u64,
}

impl TickTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct GravityTimer {
    generation: u64,
    period_ms: u32,
    next_due_ms: Option<u64>,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `period_ms`, first tick one period after `now_ms`.
    ///
    /// Re-arming an armed timer replaces the old schedule.
    pub fn arm(&mut self, now_ms: u64, period_ms: u32) {
        let period_ms = period_ms.max(1);
        self.generation = self.generation.wrapping_add(1);
        self.period_ms = period_ms;
        self.next_due_ms = Some(now_ms.saturating_add(period_ms as u64));
    }

    /// Stop ticking and invalidate every ticket issued so far.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.next_due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Current period, if armed
    pub fn period_ms(&self) -> Option<u32> {
        self.next_due_ms.map(|_| self.period_ms)
    }

    /// Time of the next tick, if armed
    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Hand out a ticket if a tick is due at `now_ms`.
    ///
    /// At most one ticket per call. When the caller has fallen more than a
    /// full period behind, the missed ticks are dropped and the schedule
    /// restarts from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<TickTicket> {
        let due = self.next_due_ms?;
        if now_ms < due {
            return None;
        }

        let period = self.period_ms as u64;
        let mut next = due.saturating_add(period);
        if next <= now_ms {
            next = now_ms.saturating_add(period);
        }
        self.next_due_ms = Some(next);

        Some(TickTicket {
            generation: self.generation,
        })
    }

    /// Whether `ticket` belongs to the current schedule.
    pub fn accepts(&self, ticket: TickTicket) -> bool {
        self.is_armed() && ticket.generation == self.generation
    }
}
