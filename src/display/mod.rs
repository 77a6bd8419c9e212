//! Writable text surfaces.
//!
//! The engine only ever reads and writes the text content of a target;
//! everything else about the surface (layout, styling, where it lives)
//! belongs to the host. Hosts implement [`DisplayTarget`] for their own UI
//! elements; [`TextSurface`] covers the plain in-memory case.

use std::fmt;

/// An opaque writable text surface.
///
/// Implementations own the displayed string. The engine reads the current
/// text to decide between the growth and substitution paths and writes each
/// intermediate state back.
pub trait DisplayTarget: fmt::Debug {
    /// The currently displayed text.
    fn text(&self) -> String;

    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// A `String`-backed display target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSurface {
    content: String,
}

impl TextSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
        }
    }
}

impl DisplayTarget for TextSurface {
    fn text(&self) -> String {
        self.content.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.content = text.to_owned();
    }
}

/// A target that reads as empty and discards writes.
///
/// Stands in for lookup keys with no registered surface, matching the
/// permissive behavior of an empty UI query result: reads yield the empty
/// string, writes are silently dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTarget;

impl DisplayTarget for NoopTarget {
    fn text(&self) -> String {
        String::new()
    }

    fn set_text(&mut self, _text: &str) {}
}
