//! # typefx
//!
//! A deterministic typewriter text effect engine.
//!
//! The engine owns a set of writable text surfaces and progressively
//! reveals or rewrites their text character-by-character with randomized
//! pacing, alternating between two fixed messages on a recurring outer
//! timer.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine only reads and writes text through the
//!    [`DisplayTarget`] trait. Terminals, GUI labels, and test buffers all
//!    plug in the same way.
//!
//! 2. **Virtual Time**: The engine never sleeps or spawns. Hosts drive it
//!    with [`TypewriterEngine::advance_to`] from their own event loop,
//!    which makes every timing property testable without real clocks.
//!
//! 3. **Deterministic**: Delays come from a seeded ChaCha8 RNG with O(1)
//!    state capture, so an animation can be replayed or checkpointed
//!    exactly.
//!
//! ## Example
//!
//! ```
//! use typefx::{EngineConfig, MessagePair, TargetId, TextSurface, TypewriterEngine};
//!
//! let config = EngineConfig::new(MessagePair::new("hello", "olleh"));
//! let mut engine = TypewriterEngine::new(config, 42);
//!
//! let h2 = TargetId::new(0);
//! engine.register_target(h2, TextSurface::new());
//! engine.start(h2);
//!
//! // First trigger fires 1000ms after start and types the plain message.
//! engine.advance_to(2000);
//! assert_eq!(engine.target_text(h2).unwrap(), "hello");
//!
//! // The next trigger (at 4000ms) types the alternate.
//! engine.advance_to(6000);
//! assert_eq!(engine.target_text(h2).unwrap(), "olleh");
//!
//! engine.stop(h2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Target IDs, message pair, configuration, RNG
//! - `display`: The writable text surface trait and stock impls
//! - `session`: The per-trigger typing state machine
//! - `engine`: Lifecycle, virtual-time scheduling, trigger alternation

pub mod core;
pub mod display;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{EffectRng, EffectRngState, EngineConfig, MessagePair, TargetId};

pub use crate::display::{DisplayTarget, NoopTarget, TextSurface};

pub use crate::session::{substitute_at, StepOutcome, TypingSession};

pub use crate::engine::TypewriterEngine;
