//! Engine configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `MessagePair`: the two alternating messages
//! - `EngineConfig`: timing parameters and the message pair
//!
//! The engine never hardcodes messages or delays - hosts define them.

use serde::{Deserialize, Serialize};

/// Display target identifier. Hosts define what targets exist.
///
/// The engine doesn't interpret target IDs - they're opaque lookup keys.
/// Hosts assign meaning by registering a [`DisplayTarget`] under an ID.
///
/// [`DisplayTarget`]: crate::display::DisplayTarget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u16);

impl TargetId {
    /// Create a new target ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target({})", self.0)
    }
}

/// The two alternating messages driving the effect.
///
/// Both strings are chosen once at startup and never mutated. They do not
/// need to have equal length; the final assignment at the end of each
/// typing session corrects any surplus characters left by a longer
/// previous message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePair {
    /// The message shown in the "resting" state.
    pub plain: String,

    /// The message alternated with `plain`.
    pub alternate: String,
}

impl MessagePair {
    /// Create a new message pair.
    pub fn new(plain: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            alternate: alternate.into(),
        }
    }

    /// Select the next message given the target's current settled text.
    ///
    /// Text equal to `plain` selects `alternate`; anything else (including
    /// `alternate` and text matching neither message) selects `plain`.
    ///
    /// ```
    /// use typefx::MessagePair;
    ///
    /// let pair = MessagePair::new("hello", "olleh");
    /// assert_eq!(pair.next("hello"), "olleh");
    /// assert_eq!(pair.next("olleh"), "hello");
    /// assert_eq!(pair.next(""), "hello");
    /// ```
    #[must_use]
    pub fn next(&self, current: &str) -> &str {
        if current == self.plain {
            &self.alternate
        } else {
            &self.plain
        }
    }
}

/// Complete engine configuration.
///
/// Hosts provide this at startup. Defaults match the reference effect:
/// first trigger 1000ms after start, re-trigger every 3000ms, and a
/// per-character delay drawn uniformly from `[20, 70)` milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The alternating message pair.
    pub messages: MessagePair,

    /// Delay from `start` to the first trigger, in milliseconds.
    pub initial_delay_ms: u64,

    /// Recurring trigger interval, in milliseconds.
    pub trigger_interval_ms: u64,

    /// Minimum per-character delay, in milliseconds.
    pub delay_floor_ms: u64,

    /// Width of the uniform jitter added to the floor. The sampled delay
    /// is an integer in `[floor, floor + jitter)`.
    pub delay_jitter_ms: u64,
}

impl EngineConfig {
    /// Create a configuration with the reference timing defaults.
    #[must_use]
    pub fn new(messages: MessagePair) -> Self {
        Self {
            messages,
            initial_delay_ms: 1000,
            trigger_interval_ms: 3000,
            delay_floor_ms: 20,
            delay_jitter_ms: 50,
        }
    }

    /// Set the delay before the first trigger.
    #[must_use]
    pub fn with_initial_delay_ms(mut self, delay: u64) -> Self {
        self.initial_delay_ms = delay;
        self
    }

    /// Set the recurring trigger interval.
    #[must_use]
    pub fn with_trigger_interval_ms(mut self, interval: u64) -> Self {
        assert!(interval > 0, "Trigger interval must be at least 1ms");
        self.trigger_interval_ms = interval;
        self
    }

    /// Set the per-character delay range `[floor, floor + jitter)`.
    #[must_use]
    pub fn with_character_delay_ms(mut self, floor: u64, jitter: u64) -> Self {
        assert!(jitter > 0, "Delay jitter must be at least 1ms");
        self.delay_floor_ms = floor;
        self.delay_jitter_ms = jitter;
        self
    }
}
