//! Capability surface of the page canvas that basic HTML is rendered onto.
//!
//! The canvas owns page geometry, the cursor, font selection and the output
//! stream. The renderer only ever talks to it through this trait.

use crate::style::{Align, FontStyle, Rgb};

pub trait Canvas {
    /// Write text from the current position, wrapping at the right margin
    /// and advancing by `line_height` per wrapped line.
    fn write_sequential(&mut self, line_height: f64, text: &str);

    /// Write a block of text aligned within the current margins.
    fn write_aligned(&mut self, line_height: f64, text: &str, align: Align);

    /// Move the cursor down by `height` and back to the left margin.
    fn line_feed(&mut self, height: f64);

    /// Select a style of the current font family. `None` keeps the size.
    fn select_font(&mut self, style: FontStyle, size: Option<f64>);

    fn text_color(&self) -> Rgb;

    fn set_text_color(&mut self, color: Rgb);

    /// Write `label` from the current position as a link to `target`.
    fn write_hyperlink(&mut self, line_height: f64, label: &str, target: &str);

    /// Advance width of `byte` in the current font, in 1/1000 em.
    fn glyph_advance(&self, byte: u8) -> u16;

    /// Current font size in user units.
    fn font_size(&self) -> f64;

    /// True once the canvas has latched an unrecoverable error.
    fn has_fault(&self) -> bool;
}
