//! Core engine types: identifiers, configuration, RNG.
//!
//! This module contains the fundamental building blocks that are
//! host-agnostic. Hosts configure these via `EngineConfig` rather than
//! modifying the core.

pub mod config;
pub mod rng;

pub use config::{EngineConfig, MessagePair, TargetId};
pub use rng::{EffectRng, EffectRngState};
