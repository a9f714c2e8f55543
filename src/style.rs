use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal placement of a text block within the current margins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// An RGB text color, each component 0 through 255
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Composite font style selected on the canvas.
///
/// Displays as the ordered concatenation of `B`, `I` and `U` for the active
/// attributes, so plain text is the empty string and bold underline is `BU`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
    };
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            f.write_str("B")?;
        }
        if self.italic {
            f.write_str("I")?;
        }
        if self.underline {
            f.write_str("U")?;
        }
        Ok(())
    }
}

/// Color and emphasis applied to hyperlink labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStyle {
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for LinkStyle {
    fn default() -> Self {
        LinkStyle {
            color: Rgb::new(0, 0, 128),
            bold: false,
            italic: false,
            underline: true,
        }
    }
}

/// Nesting state carried by a renderer across `write` calls.
///
/// Levels are signed and never clamped: a stray close tag takes a level
/// below zero and it stays there until a matching open tag brings it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleState {
    pub bold: i32,
    pub italic: i32,
    pub underline: i32,
    pub align: Align,
    pub pending_link: Option<String>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the given deltas to the nesting levels.
    pub fn adjust(&mut self, bold: i32, italic: i32, underline: i32) {
        self.bold += bold;
        self.italic += italic;
        self.underline += underline;
    }

    /// The font style implied by the current levels.
    pub fn font_style(&self) -> FontStyle {
        FontStyle {
            bold: self.bold > 0,
            italic: self.italic > 0,
            underline: self.underline > 0,
        }
    }
}
