use crate::canvas::Canvas;

/// Glyph advance widths of the core Helvetica font, indexed by cp1252 byte.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 256] = [
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278, 278,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Per-byte advance widths of a single-byte font, in 1/1000 em.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetrics {
    pub name: String,
    pub widths: [u16; 256],
}

impl FontMetrics {
    pub fn new(name: impl Into<String>, widths: [u16; 256]) -> Self {
        FontMetrics {
            name: name.into(),
            widths,
        }
    }

    /// The core Helvetica metrics
    pub fn helvetica() -> Self {
        FontMetrics::new("Helvetica", HELVETICA_WIDTHS)
    }

    pub fn advance(&self, byte: u8) -> u16 {
        self.widths[usize::from(byte)]
    }

    /// Sum of the advances of `s` in 1/1000 em, stopping at the first NUL byte.
    pub fn width_of(&self, s: &str) -> u64 {
        sum_advances(s, |b| self.advance(b))
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontMetrics::helvetica()
    }
}

/// Width of `s` in user units under the canvas's current font and size.
///
/// Returns 0 without scanning when the canvas has latched a fault.
pub fn string_width<C: Canvas + ?Sized>(canvas: &C, s: &str) -> f64 {
    if canvas.has_fault() {
        return 0.0;
    }
    let units = sum_advances(s, |b| canvas.glyph_advance(b));
    units as f64 * canvas.font_size() / 1000.0
}

// A u32 sum overflows past about 4.2M wide glyphs
fn sum_advances(s: &str, advance: impl Fn(u8) -> u16) -> u64 {
    s.bytes()
        .take_while(|&b| b != 0)
        .map(|b| u64::from(advance(b)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_reference_widths() {
        let helvetica = FontMetrics::helvetica();
        assert_eq!(helvetica.advance(b' '), 278);
        assert_eq!(helvetica.advance(b'W'), 944);
        assert_eq!(helvetica.advance(b'@'), 1015);
        assert_eq!(helvetica.width_of("This is a string"), 6446);
    }

    #[test]
    fn test_width_stops_at_nul() {
        let helvetica = FontMetrics::helvetica();
        assert_eq!(helvetica.width_of("ab\0cd"), helvetica.width_of("ab"));
        assert_eq!(helvetica.width_of("\0ab"), 0);
    }

    #[test]
    fn test_width_counts_bytes_not_chars() {
        let helvetica = FontMetrics::helvetica();
        // U+00E9 is two bytes in UTF-8: 0xC3 0xA9
        assert_eq!(
            helvetica.width_of("\u{e9}"),
            u64::from(helvetica.advance(0xC3)) + u64::from(helvetica.advance(0xA9))
        );
    }

    #[test]
    fn test_width_of_multi_megabyte_string() {
        let helvetica = FontMetrics::helvetica();
        // 4.3M * 1015 is past u32::MAX
        let wide = "@".repeat(4_300_000);
        assert_eq!(helvetica.width_of(&wide), 4_364_500_000);
    }
}
