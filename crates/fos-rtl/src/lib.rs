//! fOS RTL - Complex Text Layout for PDF Output
//!
//! This crate prepares right-to-left and mixed-direction text for the fOS
//! PDF writer:
//! - Unicode Bidirectional Algorithm (explicit embeddings, weak/neutral
//!   resolution, per-line reordering)
//! - Arabic contextual shaping into presentation forms
//! - Presentation-form ligatures and composed tashkeel
//! - European/Arabic-Indic digit conversion
//! - Mirrored glyphs and the paragraph pipeline tying it all together
//!
//! All input is UTF-16 code units, as handed over by the font layer. Font
//! parsing, glyph widths and page serialization live elsewhere; the only
//! contact point is the [`GlyphWidths`] trait.

pub mod bidi;
pub mod arabic;
pub mod digits;
pub mod options;
pub mod paragraph;

pub use bidi::{BidiClass, BidiParagraph, Level, mirror};
pub use arabic::{ArabicShaper, shape_arabic, compose_ligatures};
pub use digits::shape_digits;
pub use options::{DigitMode, DigitOptions, DigitType, ParagraphLevel, ShapingOptions, TextOptions};
pub use paragraph::{GlyphWidths, ShapedParagraph};

/// Text layout error types
///
/// Every variant is raised while validating input, before any resolution
/// work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Illegal bidi class value {value} at index {index}")]
    InvalidBidiClass { index: usize, value: u8 },

    #[error("Paragraph separator before end of paragraph at index {index}")]
    ParagraphSeparatorBeforeEnd { index: usize },

    #[error("Bad line break {offset} at index {index}")]
    InvalidLineBreak { index: usize, offset: usize },

    #[error("Last line break must be at {length}, found {last}")]
    LineBreaksIncomplete { last: usize, length: usize },

    #[error("Illegal paragraph embedding level: {0}")]
    InvalidParagraphLevel(i8),
}

pub type Result<T> = std::result::Result<T, TextError>;
