//! Virtual-time event queue.
//!
//! Pending timer callbacks, ordered by due time with scheduling order
//! breaking ties. The queue is small (one outer trigger plus at most one
//! in-flight step per target), so a linear scan beats a heap here.

use smallvec::SmallVec;

use crate::core::TargetId;

/// What a scheduled event does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EventKind {
    /// Outer interval fired: select the next message and begin typing.
    Trigger,
    /// Per-character continuation of an in-flight session.
    Step,
}

/// A pending timer callback.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScheduledEvent {
    /// Absolute engine time at which the event fires.
    pub due_ms: u64,
    /// Scheduling order, for stable tie-breaking.
    pub seq: u64,
    /// The target this event drives.
    pub target: TargetId,
    pub kind: EventKind,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct EventQueue {
    /// SmallVec sized for the common case of a handful of targets.
    events: SmallVec<[ScheduledEvent; 8]>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event at an absolute due time.
    pub fn push(&mut self, due_ms: u64, target: TargetId, kind: EventKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push(ScheduledEvent {
            due_ms,
            seq,
            target,
            kind,
        });
    }

    /// Remove and return the earliest event due at or before `now_ms`.
    ///
    /// Ties on due time fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledEvent> {
        let idx = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= now_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.seq))
            .map(|(i, _)| i)?;
        Some(self.events.remove(idx))
    }

    /// Drop every pending event for a target.
    pub fn purge_target(&mut self, target: TargetId) {
        self.events.retain(|e| e.target != target);
    }

    /// Earliest pending due time, if any events are scheduled.
    pub fn next_due(&self) -> Option<u64> {
        self.events.iter().map(|e| e.due_ms).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
