//! In-memory canvas that records every call made to it.
//!
//! Each text operation captures the font style and text color in effect when
//! it was issued, so a trace can be checked without a page model behind it.

use serde::Serialize;

use crate::canvas::Canvas;
use crate::metrics::FontMetrics;
use crate::style::{Align, FontStyle, Rgb};

pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasOp {
    Write {
        text: String,
        line_height: f64,
        style: String,
        color: Rgb,
    },
    WriteAligned {
        text: String,
        line_height: f64,
        align: Align,
        style: String,
        color: Rgb,
    },
    LineFeed {
        height: f64,
    },
    SelectFont {
        style: String,
        size: Option<f64>,
    },
    SetTextColor {
        color: Rgb,
    },
    Hyperlink {
        label: String,
        target: String,
        line_height: f64,
        style: String,
        color: Rgb,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    metrics: FontMetrics,
    font_size: f64,
    style: FontStyle,
    color: Rgb,
    fault: Option<String>,
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Helvetica at the default size, black text
    pub fn new() -> Self {
        Self::with_font(FontMetrics::helvetica(), DEFAULT_FONT_SIZE)
    }

    pub fn with_font(metrics: FontMetrics, font_size: f64) -> Self {
        RecordingCanvas {
            metrics,
            font_size,
            style: FontStyle::REGULAR,
            color: Rgb::BLACK,
            fault: None,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }

    /// Text of every plain or aligned write, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Write { text, .. } | CanvasOp::WriteAligned { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Latch a fault. Later calls are still accepted and recorded.
    pub fn set_fault(&mut self, message: impl Into<String>) {
        self.fault = Some(message.into());
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn write_sequential(&mut self, line_height: f64, text: &str) {
        self.ops.push(CanvasOp::Write {
            text: text.to_string(),
            line_height,
            style: self.style.to_string(),
            color: self.color,
        });
    }

    fn write_aligned(&mut self, line_height: f64, text: &str, align: Align) {
        self.ops.push(CanvasOp::WriteAligned {
            text: text.to_string(),
            line_height,
            align,
            style: self.style.to_string(),
            color: self.color,
        });
    }

    fn line_feed(&mut self, height: f64) {
        self.ops.push(CanvasOp::LineFeed { height });
    }

    fn select_font(&mut self, style: FontStyle, size: Option<f64>) {
        self.style = style;
        if let Some(size) = size.filter(|s| *s > 0.0) {
            self.font_size = size;
        }
        self.ops.push(CanvasOp::SelectFont {
            style: style.to_string(),
            size,
        });
    }

    fn text_color(&self) -> Rgb {
        self.color
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.color = color;
        self.ops.push(CanvasOp::SetTextColor { color });
    }

    fn write_hyperlink(&mut self, line_height: f64, label: &str, target: &str) {
        self.ops.push(CanvasOp::Hyperlink {
            label: label.to_string(),
            target: target.to_string(),
            line_height,
            style: self.style.to_string(),
            color: self.color,
        });
    }

    fn glyph_advance(&self, byte: u8) -> u16 {
        self.metrics.advance(byte)
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn has_fault(&self) -> bool {
        self.fault.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD: FontStyle = FontStyle {
        bold: true,
        italic: false,
        underline: false,
    };

    #[test]
    fn test_select_font_keeps_size_when_none() {
        let mut canvas = RecordingCanvas::with_font(FontMetrics::helvetica(), 20.0);
        canvas.select_font(BOLD, None);
        assert_eq!(canvas.font_size(), 20.0);
        canvas.select_font(BOLD, Some(0.0));
        assert_eq!(canvas.font_size(), 20.0);
        canvas.select_font(FontStyle::REGULAR, Some(9.0));
        assert_eq!(canvas.font_size(), 9.0);
    }

    #[test]
    fn test_writes_capture_style_and_color() {
        let mut canvas = RecordingCanvas::new();
        canvas.select_font(
            FontStyle {
                italic: true,
                ..FontStyle::REGULAR
            },
            None,
        );
        canvas.set_text_color(Rgb::new(1, 2, 3));
        canvas.write_sequential(5.0, "x");

        assert_eq!(
            canvas.ops().last(),
            Some(&CanvasOp::Write {
                text: "x".to_string(),
                line_height: 5.0,
                style: "I".to_string(),
                color: Rgb::new(1, 2, 3),
            })
        );
        assert_eq!(canvas.texts(), vec!["x"]);
    }

    #[test]
    fn test_default_canvas_is_helvetica() {
        let canvas = RecordingCanvas::new();
        assert_eq!(canvas.metrics().name, "Helvetica");
        assert_eq!(canvas.font_size(), DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_fault_is_latched_and_calls_are_absorbed() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_fault("font not found");
        canvas.line_feed(4.0);
        assert!(canvas.has_fault());
        assert_eq!(canvas.fault(), Some("font not found"));
        assert_eq!(canvas.take_ops().len(), 1);
        assert!(canvas.ops().is_empty());
    }
}
