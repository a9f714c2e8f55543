use crate::attributes::Attributes;
use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::diagnostics::Diagnostics;
use crate::error::HtmlBasicResult;
use crate::metrics;
use crate::style::{Align, LinkStyle, StyleState};
use crate::tokenizer::{tokenize_with_diagnostics, Segment};

/// Tag names the renderer acts on. Anything else is ignored.
pub const VOCABULARY: &[&str] = &["b", "i", "u", "br", "center", "a"];

/// Renders basic HTML onto a [`Canvas`].
///
/// Supports bold (`b`), italic (`i`), underline (`u`), line breaks (`br`),
/// centered blocks (`center`) and hyperlinks (`a href=...`). Style nesting is
/// kept on the instance, so a tag opened in one `write` call stays in effect
/// for the next. Use one instance per output document.
#[derive(Debug, Clone, Default)]
pub struct HtmlBasic {
    link: LinkStyle,
    state: StyleState,
    diagnostics: Diagnostics,
}

impl HtmlBasic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_style(link: LinkStyle) -> Self {
        HtmlBasic {
            link,
            ..Self::default()
        }
    }

    pub fn with_config(config: &RenderConfig) -> HtmlBasicResult<Self> {
        config.validate()?;
        Ok(Self::with_link_style(config.link.to_link_style()?))
    }

    pub fn link_style(&self) -> &LinkStyle {
        &self.link
    }

    pub fn link_style_mut(&mut self) -> &mut LinkStyle {
        &mut self.link
    }

    pub fn state(&self) -> &StyleState {
        &self.state
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Width of `s` under the canvas's current font, 0 if the canvas faulted.
    pub fn string_width<C: Canvas + ?Sized>(&self, canvas: &C, s: &str) -> f64 {
        metrics::string_width(canvas, s)
    }

    /// Write `html` from the current position. Lines wrap at the right
    /// margin and the cursor is left at the end of the text.
    pub fn write<C: Canvas + ?Sized>(&mut self, canvas: &mut C, line_height: f64, html: &str) {
        let segments = tokenize_with_diagnostics(html, &mut self.diagnostics);
        self.write_segments(canvas, line_height, &segments);
    }

    /// Render an already tokenized segment list.
    pub fn write_segments<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        line_height: f64,
        segments: &[Segment],
    ) {
        for segment in segments {
            match segment {
                Segment::Text { text, .. } => self.put_text(canvas, line_height, text),
                Segment::Open {
                    name, attributes, ..
                } => self.open_tag(canvas, line_height, name, attributes),
                Segment::Close { name, .. } => self.close_tag(canvas, line_height, name),
            }
        }
    }

    fn put_text<C: Canvas + ?Sized>(&mut self, canvas: &mut C, line_height: f64, text: &str) {
        if let Some(href) = self.state.pending_link.take() {
            self.put_link(canvas, line_height, &href, text);
            return;
        }
        match self.state.align {
            Align::Center => canvas.write_aligned(line_height, text, Align::Center),
            Align::Left => canvas.write_sequential(line_height, text),
        }
    }

    fn open_tag<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        line_height: f64,
        name: &str,
        attributes: &Attributes,
    ) {
        match name {
            "b" => self.set_style(canvas, 1, 0, 0),
            "i" => self.set_style(canvas, 0, 1, 0),
            "u" => self.set_style(canvas, 0, 0, 1),
            "br" => canvas.line_feed(line_height),
            "center" => {
                canvas.line_feed(line_height);
                self.state.align = Align::Center;
            }
            "a" => self.state.pending_link = attributes.get("href").cloned(),
            other => self.ignore_tag(other),
        }
    }

    fn close_tag<C: Canvas + ?Sized>(&mut self, canvas: &mut C, line_height: f64, name: &str) {
        match name {
            "b" => self.close_style(canvas, 1, 0, 0),
            "i" => self.close_style(canvas, 0, 1, 0),
            "u" => self.close_style(canvas, 0, 0, 1),
            "center" => {
                canvas.line_feed(line_height);
                self.state.align = Align::Left;
            }
            other if VOCABULARY.contains(&other) => {}
            other => self.ignore_tag(other),
        }
    }

    fn ignore_tag(&mut self, name: &str) {
        log::debug!("ignoring unsupported tag <{}>", name);
        self.diagnostics.ignored_tags += 1;
    }

    /// Apply level deltas and select the resulting composite style.
    fn set_style<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        bold: i32,
        italic: i32,
        underline: i32,
    ) {
        self.state.adjust(bold, italic, underline);
        canvas.select_font(self.state.font_style(), None);
    }

    /// Close one level of a style. The level is not floored at zero.
    fn close_style<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        bold: i32,
        italic: i32,
        underline: i32,
    ) {
        self.set_style(canvas, -bold, -italic, -underline);
        let level =
            bold * self.state.bold + italic * self.state.italic + underline * self.state.underline;
        if level < 0 {
            log::debug!("unbalanced close tag, level now {}", level);
            self.diagnostics.unbalanced_closes += 1;
        }
    }

    /// Write a hyperlink in the configured link color and emphasis, then put
    /// the previous color and levels back.
    fn put_link<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        line_height: f64,
        href: &str,
        label: &str,
    ) {
        let bold = i32::from(self.link.bold);
        let italic = i32::from(self.link.italic);
        let underline = i32::from(self.link.underline);
        let saved = canvas.text_color();

        canvas.set_text_color(self.link.color);
        self.set_style(canvas, bold, italic, underline);
        canvas.write_hyperlink(line_height, label, href);
        self.set_style(canvas, -bold, -italic, -underline);
        canvas.set_text_color(saved);
    }
}
