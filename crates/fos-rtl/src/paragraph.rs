//! Shaped paragraph
//!
//! Ties the pieces together for one paragraph of UTF-16 text: digit
//! shaping, bidi resolution, Arabic shaping of each Arabic run and glyph
//! mirroring. Line breaking is left to the caller, which asks for the
//! visual order one line range at a time.

use std::ops::Range;

use crate::arabic::shape_arabic;
use crate::bidi::{BidiParagraph, Level, mirror_glyphs, reorder_line};
use crate::digits::shape_digits;
use crate::options::{ParagraphLevel, TextOptions};

/// Arabic block handled by the shaper
const ARABIC_BLOCK: Range<u16> = 0x0600..0x0700;

/// Advance widths supplied by the font layer
pub trait GlyphWidths {
    /// Advance width of a single (shaped) code unit
    fn advance(&self, unit: u16) -> f32;
}

/// A paragraph ready for line layout
#[derive(Debug, Clone)]
pub struct ShapedParagraph {
    text: Vec<u16>,
    levels: Vec<Level>,
    base_level: Level,
}

impl ShapedParagraph {
    /// Shape and resolve a paragraph
    pub fn new(text: &[u16], level: ParagraphLevel, options: &TextOptions) -> Self {
        let mut logical = text.to_vec();
        shape_digits(&mut logical, &options.digits);

        let bidi = BidiParagraph::from_utf16(&logical, level);
        let resolved = bidi.levels();

        let (mut text, levels) = shape_arabic_runs(&logical, &resolved, options);
        mirror_glyphs(&mut text, &levels);

        tracing::debug!(
            "Shaped paragraph: {} units in, {} out",
            logical.len(),
            text.len()
        );

        Self {
            text,
            levels,
            base_level: bidi.base_level(),
        }
    }

    /// Shaped text in logical order
    pub fn text(&self) -> &[u16] {
        &self.text
    }

    /// Level of each shaped code unit
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Paragraph embedding level
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Number of shaped code units
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the shaped text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Logical indices of one line in visual order
    ///
    /// `range` indexes the shaped text and is clamped to its length.
    pub fn visual_order(&self, range: Range<usize>) -> Vec<usize> {
        let range = self.clamp(range);
        let start = range.start;
        let levels = &self.levels[range.clone()];

        if !levels.iter().any(|level| level.is_rtl()) {
            return range.collect();
        }
        if levels.iter().all(|level| level.is_rtl()) {
            return range.rev().collect();
        }

        reorder_line(levels).into_iter().map(|i| i + start).collect()
    }

    /// Shaped units of one line in visual order
    pub fn visual_text(&self, range: Range<usize>) -> Vec<u16> {
        self.visual_order(range)
            .into_iter()
            .map(|i| self.text[i])
            .collect()
    }

    /// Total advance width of a range of the shaped text
    pub fn width(&self, range: Range<usize>, widths: &impl GlyphWidths) -> f32 {
        self.text[self.clamp(range)]
            .iter()
            .map(|&unit| widths.advance(unit))
            .sum()
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.text.len());
        range.start.min(end)..end
    }
}

/// Shape every maximal Arabic run, copying everything else through
///
/// Shaping only ever shortens a run, so output unit `k` keeps the level
/// of input unit `start + k`.
fn shape_arabic_runs(
    text: &[u16],
    levels: &[Level],
    options: &TextOptions,
) -> (Vec<u16>, Vec<Level>) {
    let mut shaped = Vec::with_capacity(text.len());
    let mut shaped_levels = Vec::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if !ARABIC_BLOCK.contains(&text[i]) {
            shaped.push(text[i]);
            shaped_levels.push(levels[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < text.len() && ARABIC_BLOCK.contains(&text[i]) {
            i += 1;
        }

        let run = shape_arabic(&text[start..i], &options.shaping);
        tracing::trace!("Arabic run {}..{} shaped to {} units", start, i, run.len());
        shaped_levels.extend(levels[start..i].iter().copied().take(run.len()));
        shaped.extend(run);
    }

    (shaped, shaped_levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DigitMode, DigitOptions, DigitType, ShapingOptions};

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    struct Monospace;

    impl GlyphWidths for Monospace {
        fn advance(&self, _unit: u16) -> f32 {
            10.0
        }
    }

    #[test]
    fn test_latin_unchanged() {
        let text = utf16("abc");
        let paragraph = ShapedParagraph::new(&text, ParagraphLevel::Auto, &TextOptions::default());
        assert_eq!(paragraph.text(), text.as_slice());
        assert_eq!(paragraph.base_level(), Level::LTR);
        assert_eq!(paragraph.visual_order(0..3), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_paragraph() {
        let paragraph = ShapedParagraph::new(&[], ParagraphLevel::Rtl, &TextOptions::default());
        assert!(paragraph.is_empty());
        assert!(paragraph.visual_order(0..0).is_empty());
    }

    #[test]
    fn test_lam_alef_shortens_text() {
        let paragraph =
            ShapedParagraph::new(&[0x0644, 0x0627], ParagraphLevel::Auto, &TextOptions::default());
        assert_eq!(paragraph.text(), &[0xFEFB]);
        assert_eq!(paragraph.levels(), &[Level::RTL]);
        assert_eq!(paragraph.base_level(), Level::RTL);
    }

    #[test]
    fn test_all_odd_flips() {
        // Beh Beh Beh
        let paragraph = ShapedParagraph::new(
            &[0x0628, 0x0628, 0x0628],
            ParagraphLevel::Auto,
            &TextOptions::default(),
        );
        assert_eq!(paragraph.text(), &[0xFE91, 0xFE92, 0xFE90]);
        assert_eq!(paragraph.visual_order(0..3), vec![2, 1, 0]);
        assert_eq!(paragraph.visual_text(0..3), vec![0xFE90, 0xFE92, 0xFE91]);
    }

    #[test]
    fn test_mixed_line() {
        // "ab " then Alef Beh: LTR paragraph with an RTL run at the end
        let mut text = utf16("ab ");
        text.extend([0x0627, 0x0628]);
        let paragraph = ShapedParagraph::new(&text, ParagraphLevel::Ltr, &TextOptions::default());
        assert_eq!(paragraph.visual_order(0..5), vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_brackets_mirrored_in_rtl() {
        let text = [0x0628, u16::from(b'('), 0x0628, u16::from(b')')];
        let paragraph = ShapedParagraph::new(&text, ParagraphLevel::Rtl, &TextOptions::default());
        assert_eq!(paragraph.text()[1], u16::from(b')'));
        assert_eq!(paragraph.text()[3], u16::from(b'('));
    }

    #[test]
    fn test_digits_then_bidi() {
        let options = TextOptions {
            shaping: ShapingOptions::default(),
            digits: DigitOptions::new(DigitMode::EuropeanToArabic, DigitType::ArabicIndic),
        };
        let paragraph = ShapedParagraph::new(&utf16("12"), ParagraphLevel::Ltr, &options);
        assert_eq!(paragraph.text(), &[0x0661, 0x0662]);
        // AN rises to level 2; no odd level, so nothing moves
        assert_eq!(paragraph.levels(), &[Level(2), Level(2)]);
        assert_eq!(paragraph.visual_order(0..2), vec![0, 1]);
    }

    #[test]
    fn test_digits_attached_to_letter() {
        // Waw directly followed by Arabic-Indic digits forms a single run
        let paragraph = ShapedParagraph::new(
            &[0x0648, 0x0661, 0x0662],
            ParagraphLevel::Rtl,
            &TextOptions::default(),
        );
        assert_eq!(paragraph.text(), &[0xFEED, 0x0661, 0x0662]);
        assert_eq!(paragraph.levels(), &[Level(1), Level(2), Level(2)]);
        assert_eq!(paragraph.visual_order(0..3), vec![1, 2, 0]);
    }

    #[test]
    fn test_width() {
        let paragraph = ShapedParagraph::new(&utf16("abcd"), ParagraphLevel::Ltr, &TextOptions::default());
        assert_eq!(paragraph.width(1..3, &Monospace), 20.0);
        assert_eq!(paragraph.width(2..10, &Monospace), 20.0);
    }
}
