//! # Basic HTML for page canvases
//!
//! Renders a very small subset of HTML onto a document canvas, using the
//! canvas's own fonts, colors and cursor.
//!
//! ## Features
//! - Bold (`<b>`), italic (`<i>`) and underline (`<u>`) with nesting
//! - Line breaks (`<br>`) and centered blocks (`<center>`)
//! - Hyperlinks (`<a href="...">`) in a configurable link style
//! - String width measurement against per-byte font metrics
//! - Malformed markup degrades to literal text, never to an error
//!
//! Anything else (entities, CSS, other tags) is left alone or ignored.
//!
//! ## Example
//! ```ignore
//! use htmlbasic::{HtmlBasic, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! let mut html = HtmlBasic::new();
//! html.write(&mut canvas, 5.0, "Visit <a href='http://example.com'>us</a> <b>today</b>");
//! ```

pub mod attributes;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod recording;
pub mod renderer;
pub mod style;
pub mod tokenizer;

// --- Core types ---
pub use attributes::Attributes;
pub use canvas::Canvas;
pub use diagnostics::Diagnostics;
pub use error::{HtmlBasicError, HtmlBasicResult};
pub use renderer::HtmlBasic;
pub use style::{Align, FontStyle, LinkStyle, Rgb, StyleState};
pub use tokenizer::Segment;

// --- Collaborators ---
pub use clock::{Clock, RealClock};
pub use config::{LinkConfig, RenderConfig};
pub use metrics::FontMetrics;
pub use recording::{CanvasOp, RecordingCanvas};

/// Split basic HTML into text, open-tag and close-tag segments
pub fn tokenize(html: &str) -> Vec<Segment> {
    tokenizer::tokenize(html)
}

/// Width of `s` in user units under the canvas's current font
pub fn string_width<C: Canvas + ?Sized>(canvas: &C, s: &str) -> f64 {
    metrics::string_width(canvas, s)
}
