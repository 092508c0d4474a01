//! Edge case and stress tests for fos-rtl
//!
//! Tests degenerate input, validation errors and embedding overflow.

use fos_rtl::{
    ArabicShaper, BidiClass, BidiParagraph, Level, ParagraphLevel, ShapedParagraph,
    ShapingOptions, TextError, TextOptions, compose_ligatures, shape_arabic,
};
use BidiClass::*;

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_empty_bidi_paragraph() {
    let paragraph = BidiParagraph::new(&[], ParagraphLevel::Auto).unwrap();
    assert!(paragraph.is_empty());
    assert_eq!(paragraph.base_level(), Level::LTR);
    assert!(paragraph.levels().is_empty());
    assert_eq!(paragraph.reordering(&[]).unwrap(), Vec::<usize>::new());
}

#[test]
fn test_empty_shaping() {
    assert!(shape_arabic(&[], &ShapingOptions::default()).is_empty());
    assert!(compose_ligatures(&[], &ShapingOptions::new().ligatures(true)).is_empty());
    assert!(ArabicShaper::new(ShapingOptions::default()).finish().is_empty());
}

#[test]
fn test_single_character() {
    let paragraph = BidiParagraph::new(&[R], ParagraphLevel::Auto).unwrap();
    assert_eq!(paragraph.levels(), vec![Level::RTL]);
    assert_eq!(paragraph.reordering(&[1]).unwrap(), vec![0]);
}

#[test]
fn test_only_neutrals() {
    // No strong character: paragraph defaults to LTR
    let paragraph = BidiParagraph::new(&[WS, ON, WS], ParagraphLevel::Auto).unwrap();
    assert_eq!(paragraph.base_level(), Level::LTR);
    assert!(paragraph.levels().iter().all(|l| *l == Level::LTR));
}

#[test]
fn test_lone_vowel() {
    // A vowel with no base letter is kept as is
    assert_eq!(shape_arabic(&[0x064E], &ShapingOptions::default()), vec![0x064E]);
}

#[test]
fn test_lone_lam() {
    assert_eq!(shape_arabic(&[0x0644], &ShapingOptions::default()), vec![0xFEDD]);
}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

#[test]
fn test_separator_before_end() {
    let result = BidiParagraph::new(&[L, B, L], ParagraphLevel::Auto);
    assert_eq!(
        result.unwrap_err(),
        TextError::ParagraphSeparatorBeforeEnd { index: 1 }
    );
}

#[test]
fn test_separator_at_end() {
    let paragraph = BidiParagraph::new(&[R, B], ParagraphLevel::Ltr).unwrap();
    assert_eq!(paragraph.levels(), vec![Level::RTL, Level::LTR]);
}

#[test]
fn test_invalid_raw_class() {
    let result = BidiParagraph::from_raw(&[0, 3, 42], -1);
    assert_eq!(
        result.unwrap_err(),
        TextError::InvalidBidiClass { index: 2, value: 42 }
    );
}

#[test]
fn test_invalid_paragraph_level() {
    let result = BidiParagraph::from_raw(&[0], 5);
    assert_eq!(result.unwrap_err(), TextError::InvalidParagraphLevel(5));
}

#[test]
fn test_invalid_line_breaks() {
    let paragraph = BidiParagraph::new(&[L, L, L, L], ParagraphLevel::Ltr).unwrap();

    assert_eq!(
        paragraph.reordering(&[2, 1, 4]).unwrap_err(),
        TextError::InvalidLineBreak { index: 1, offset: 1 }
    );
    assert_eq!(
        paragraph.levels_for_lines(&[2, 3]).unwrap_err(),
        TextError::LineBreaksIncomplete { last: 3, length: 4 }
    );
}

#[test]
fn test_error_messages() {
    let error = TextError::InvalidParagraphLevel(7);
    assert_eq!(error.to_string(), "Illegal paragraph embedding level: 7");
}

// ============================================================================
// EMBEDDING OVERFLOW
// ============================================================================

#[test]
fn test_deep_embedding_capped() {
    let mut classes = vec![RLE; 100];
    classes.push(L);
    let paragraph = BidiParagraph::new(&classes, ParagraphLevel::Ltr).unwrap();

    // Embedding stops at 61; the L then rises by one during implicit resolution
    assert_eq!(paragraph.levels()[100], Level(62));
}

#[test]
fn test_unmatched_pdf_ignored() {
    let paragraph = BidiParagraph::new(&[PDF, PDF, R, PDF], ParagraphLevel::Auto).unwrap();
    assert_eq!(paragraph.base_level(), Level::RTL);
    assert_eq!(paragraph.levels()[2], Level::RTL);
}

#[test]
fn test_long_mixed_text() {
    let text: Vec<u16> = "abc \u{05D0}\u{05D1} 123 "
        .repeat(500)
        .encode_utf16()
        .collect();
    let paragraph = ShapedParagraph::new(&text, ParagraphLevel::Auto, &TextOptions::default());
    assert_eq!(paragraph.len(), text.len());

    let mut order = paragraph.visual_order(0..paragraph.len());
    order.sort_unstable();
    assert_eq!(order, (0..text.len()).collect::<Vec<_>>());
}

// ============================================================================
// SHAPING CORNERS
// ============================================================================

#[test]
fn test_zwj_forces_joining() {
    // Beh followed by ZWJ takes its initial form
    let shaped = shape_arabic(&[0x0628, 0x200D], &ShapingOptions::default());
    assert_eq!(shaped[0], 0xFE91);
}

#[test]
fn test_madda_elsewhere_dropped() {
    assert_eq!(
        shape_arabic(&[0x0645, 0x0653], &ShapingOptions::default()),
        vec![0xFEE1]
    );
}

#[test]
fn test_streaming_matches_batch() {
    let text = [0x0628, 0x0633, 0x0645, 0x064E, 0x0644, 0x0627];
    let mut shaper = ArabicShaper::new(ShapingOptions::default());
    for &unit in &text {
        shaper.feed(unit);
    }
    assert_eq!(shaper.finish(), shape_arabic(&text, &ShapingOptions::default()));
}
