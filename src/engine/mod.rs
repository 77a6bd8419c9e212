//! Engine lifecycle and scheduling.
//!
//! [`TypewriterEngine`] owns the registered display targets, the pending
//! timer events, and the in-flight typing sessions. It never sleeps or
//! spawns: time is explicit milliseconds, and the host drives the engine
//! by calling [`advance_to`](TypewriterEngine::advance_to) from its own
//! event loop. All mutation happens on the caller's thread, so the
//! single-target serialization invariant needs no locking.
//!
//! ## Lifecycle
//!
//! - [`start`](TypewriterEngine::start) schedules the first trigger after
//!   the configured initial delay, then re-triggers on the configured
//!   interval indefinitely. Starting an already-started target is a no-op;
//!   a single start yields exactly one trigger per interval window.
//! - [`stop`](TypewriterEngine::stop) clears the outer interval and any
//!   in-flight session, leaving no pending callbacks. Safe to call any
//!   number of times.
//!
//! ## Serialization per target
//!
//! At most one session drives a target at a time. A trigger that fires
//! while a session for that target is still typing is ignored; character
//! writes for one message are strictly sequential and never interleave
//! with another session's.

mod queue;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{EffectRng, EngineConfig, TargetId};
use crate::display::{DisplayTarget, NoopTarget};
use crate::session::{StepOutcome, TypingSession};

use queue::{EventKind, EventQueue};

/// The typewriter effect engine.
///
/// See the [module docs](self) for the lifecycle and scheduling model.
#[derive(Debug)]
pub struct TypewriterEngine {
    config: EngineConfig,
    rng: EffectRng,
    targets: FxHashMap<TargetId, Box<dyn DisplayTarget>>,
    sessions: FxHashMap<TargetId, TypingSession>,
    started: FxHashSet<TargetId>,
    queue: EventQueue,
    /// Stand-in surface for unregistered target ids.
    noop: NoopTarget,
    now_ms: u64,
}

impl TypewriterEngine {
    /// Create an engine with a seeded RNG.
    ///
    /// The same seed and the same sequence of calls produce identical
    /// delays and identical intermediate display states.
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, EffectRng::new(seed))
    }

    /// Create an engine with an explicit RNG (e.g. restored from a
    /// checkpoint, or entropy-seeded via [`EffectRng::from_entropy`]).
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: EffectRng) -> Self {
        Self {
            config,
            rng,
            targets: FxHashMap::default(),
            sessions: FxHashMap::default(),
            started: FxHashSet::default(),
            queue: EventQueue::new(),
            noop: NoopTarget,
            now_ms: 0,
        }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current engine time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Earliest pending event time, if anything is scheduled.
    ///
    /// Hosts can sleep until this instant before the next
    /// [`advance_to`](Self::advance_to) call.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.next_due()
    }

    /// Register a display target under a lookup key.
    ///
    /// Replaces any previously registered surface for that key.
    pub fn register_target(&mut self, id: TargetId, target: impl DisplayTarget + 'static) {
        self.targets.insert(id, Box::new(target));
    }

    /// Remove a target, stopping its effect first.
    pub fn remove_target(&mut self, id: TargetId) -> Option<Box<dyn DisplayTarget>> {
        self.stop(id);
        self.targets.remove(&id)
    }

    /// Current text of a registered target.
    #[must_use]
    pub fn target_text(&self, id: TargetId) -> Option<String> {
        self.targets.get(&id).map(|t| t.text())
    }

    /// Whether the outer interval for a target is running.
    #[must_use]
    pub fn is_started(&self, id: TargetId) -> bool {
        self.started.contains(&id)
    }

    /// Whether a typing session for a target is in flight.
    #[must_use]
    pub fn is_typing(&self, id: TargetId) -> bool {
        self.sessions.contains_key(&id)
    }

    /// Begin the repeating effect for a target.
    ///
    /// Schedules the first trigger `initial_delay_ms` from now, then
    /// re-triggers every `trigger_interval_ms` until [`stop`](Self::stop).
    /// Idempotent: a second `start` for the same target changes nothing.
    pub fn start(&mut self, id: TargetId) {
        if !self.started.insert(id) {
            debug!("{} already started, ignoring", id);
            return;
        }
        debug!(
            "{} started, first trigger in {}ms",
            id, self.config.initial_delay_ms
        );
        self.queue
            .push(self.now_ms + self.config.initial_delay_ms, id, EventKind::Trigger);
    }

    /// Stop the effect for a target.
    ///
    /// Clears the outer interval and any in-flight session; no callbacks
    /// for this target remain pending afterwards. The target keeps
    /// whatever text was last written. Safe to call repeatedly and for
    /// targets that were never started.
    pub fn stop(&mut self, id: TargetId) {
        let was_running = self.started.remove(&id) | self.sessions.remove(&id).is_some();
        self.queue.purge_target(id);
        if was_running {
            debug!("{} stopped", id);
        }
    }

    /// Fire a trigger for a target immediately.
    ///
    /// Selects the next message from the target's current text (`plain`
    /// selects `alternate`; anything else selects `plain`), begins a
    /// session, and writes its first character at the current engine
    /// time. Ignored if a session for this target is already in flight.
    pub fn trigger(&mut self, id: TargetId) {
        self.begin_session(id);
    }

    /// Advance engine time, firing all due events in timestamp order.
    ///
    /// Ties fire in scheduling order. Calls with `now_ms` earlier than
    /// the current engine time are no-ops.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            return;
        }
        while let Some(event) = self.queue.pop_due(now_ms) {
            self.now_ms = event.due_ms;
            match event.kind {
                EventKind::Trigger => self.fire_trigger(event.target),
                EventKind::Step => self.step_session(event.target),
            }
        }
        self.now_ms = now_ms;
    }

    /// Handle an outer interval firing: reschedule, then begin typing.
    fn fire_trigger(&mut self, id: TargetId) {
        if !self.started.contains(&id) {
            return;
        }
        self.queue
            .push(self.now_ms + self.config.trigger_interval_ms, id, EventKind::Trigger);
        self.begin_session(id);
    }

    fn begin_session(&mut self, id: TargetId) {
        if self.sessions.contains_key(&id) {
            // Serialize per target: never interleave two sessions.
            debug!("{} trigger ignored, session in flight", id);
            return;
        }

        let current = match self.targets.get(&id) {
            Some(target) => target.text(),
            None => String::new(),
        };
        let message = self.config.messages.next(&current).to_owned();
        debug!("{} typing {:?}", id, message);

        self.sessions.insert(id, TypingSession::new(&message));
        self.step_session(id);
    }

    fn step_session(&mut self, id: TargetId) {
        let floor = self.config.delay_floor_ms;
        let jitter = self.config.delay_jitter_ms;

        let session = match self.sessions.get_mut(&id) {
            Some(session) => session,
            // Stale continuation after stop.
            None => return,
        };
        let target: &mut dyn DisplayTarget = match self.targets.get_mut(&id) {
            Some(target) => target.as_mut(),
            // Unregistered key: writes are silently discarded.
            None => &mut self.noop,
        };

        match session.step(target, &mut self.rng, floor, jitter) {
            StepOutcome::Continue { delay_ms } => {
                trace!("{} revealed {} chars, next in {}ms", id, session.revealed(), delay_ms);
                self.queue.push(self.now_ms + delay_ms, id, EventKind::Step);
            }
            StepOutcome::Complete => {
                trace!("{} session complete", id);
                self.sessions.remove(&id);
            }
        }
    }
}
