//! The per-trigger typing state machine.
//!
//! A [`TypingSession`] reveals one message into one target, character by
//! character. Each call to [`TypingSession::step`] writes one intermediate
//! display state and reports how long to wait before the next step; the
//! session carries `(message, index)` as explicit state, so a host can
//! drop it at any point to cancel cleanly.
//!
//! ## Step semantics
//!
//! At step `i` (1-based count of revealed characters):
//! - if the target's current text has fewer than `i` characters, the text
//!   becomes the prefix `message[0..i)` (growth path);
//! - otherwise the character at position `i-1` is substituted with
//!   `message[i-1]` (substitution path).
//!
//! Once `i` exceeds the message length the session unconditionally assigns
//! the complete message and completes. Surplus trailing characters from a
//! longer previous message are never trimmed mid-sequence; the final
//! assignment is what corrects them.
//!
//! All positions are `char` positions, not byte offsets - messages may
//! contain non-ASCII characters.

use serde::{Deserialize, Serialize};

use crate::core::EffectRng;
use crate::display::DisplayTarget;

/// Return a new string with the char at `index` replaced by `ch`.
///
/// Out-of-range indices leave the string unchanged.
///
/// ```
/// use typefx::substitute_at;
///
/// assert_eq!(substitute_at("chat", 2, 'o'), "chot");
/// assert_eq!(substitute_at("chat", 9, 'o'), "chat");
/// ```
#[must_use]
pub fn substitute_at(s: &str, index: usize, ch: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == index { ch } else { c })
        .collect()
}

/// Result of a single session step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A character was written; wait `delay_ms` before the next step.
    Continue {
        /// Milliseconds to wait before the next step.
        delay_ms: u64,
    },

    /// The complete message was assigned; the session is finished.
    Complete,
}

/// Transient state for revealing one message into one target.
///
/// Created per trigger and discarded on completion. The session holds no
/// reference to its target; the caller supplies it on every step, which
/// keeps the session serializable for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSession {
    message: Vec<char>,
    index: usize,
}

impl TypingSession {
    /// Create a session for the given message.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.chars().collect(),
            index: 0,
        }
    }

    /// The message being revealed.
    #[must_use]
    pub fn message(&self) -> String {
        self.message.iter().collect()
    }

    /// Number of characters revealed so far.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.index
    }

    /// Perform one step: write the next intermediate state to `target`.
    ///
    /// Returns [`StepOutcome::Continue`] with the sampled delay while
    /// characters remain, or [`StepOutcome::Complete`] after the final
    /// unconditional assignment of the whole message.
    pub fn step(
        &mut self,
        target: &mut dyn DisplayTarget,
        rng: &mut EffectRng,
        delay_floor_ms: u64,
        delay_jitter_ms: u64,
    ) -> StepOutcome {
        if self.index >= self.message.len() {
            // Final assignment corrects any substitution drift and surplus
            // characters left over from a longer previous message.
            let full: String = self.message.iter().collect();
            target.set_text(&full);
            return StepOutcome::Complete;
        }

        let i = self.index + 1;
        let current = target.text();
        if current.chars().count() < i {
            let prefix: String = self.message[..i].iter().collect();
            target.set_text(&prefix);
        } else {
            target.set_text(&substitute_at(&current, i - 1, self.message[i - 1]));
        }
        self.index = i;

        StepOutcome::Continue {
            delay_ms: rng.delay_ms(delay_floor_ms, delay_jitter_ms),
        }
    }
}
