//! Bidi resolution of one paragraph

use super::class::{classes_from_raw, classify};
use super::compact::{reinsert_explicit_codes, remove_explicit_codes};
use super::explicit::resolve_explicit;
use super::reorder::{line_levels, reorder_lines, validate_line_breaks};
use super::run::{RunResolver, level_runs};
use super::{BidiClass, Level};
use crate::options::ParagraphLevel;
use crate::{Result, TextError};

/// Bidi paragraph information
///
/// Resolution runs eagerly on construction; levels and reorderings for
/// any set of line breaks are derived from the stored result.
#[derive(Debug, Clone)]
pub struct BidiParagraph {
    /// Base paragraph level
    base_level: Level,
    /// Original bidi classes
    initial_types: Vec<BidiClass>,
    /// Classes after weak and neutral resolution
    resolved_types: Vec<BidiClass>,
    /// Resolved embedding levels per character, before rule L1
    levels: Vec<Level>,
}

impl BidiParagraph {
    /// Resolve a paragraph of bidi classes
    ///
    /// A paragraph separator is only accepted as the last class.
    pub fn new(classes: &[BidiClass], level: ParagraphLevel) -> Result<Self> {
        if let Some(index) = classes
            .iter()
            .take(classes.len().saturating_sub(1))
            .position(|&c| c == BidiClass::B)
        {
            return Err(TextError::ParagraphSeparatorBeforeEnd { index });
        }

        Ok(Self::resolve(classes.to_vec(), level))
    }

    /// Resolve a paragraph of raw class values (0..=18)
    ///
    /// `level` is -1 to derive the paragraph level from the text, or 0/1.
    pub fn from_raw(types: &[u8], level: i8) -> Result<Self> {
        let classes = classes_from_raw(types)?;
        let level = ParagraphLevel::try_from(level)?;
        Self::new(&classes, level)
    }

    /// Resolve a paragraph of UTF-16 text
    ///
    /// Separators inside the text are tolerated: they reset the explicit
    /// embedding state instead of being rejected.
    pub fn from_utf16(text: &[u16], level: ParagraphLevel) -> Self {
        Self::resolve(classify(text), level)
    }

    fn resolve(initial_types: Vec<BidiClass>, level: ParagraphLevel) -> Self {
        let base_level = match level {
            ParagraphLevel::Ltr => Level::LTR,
            ParagraphLevel::Rtl => Level::RTL,
            ParagraphLevel::Auto => Self::determine_base_level(&initial_types),
        };

        // X1-X8
        let embeddings = resolve_explicit(&initial_types, base_level);
        let mut types = initial_types.clone();
        let mut levels = Vec::with_capacity(types.len());
        for (class, embedding) in types.iter_mut().zip(&embeddings) {
            if embedding.overrides {
                *class = embedding.level.strong_type();
            }
            levels.push(embedding.level);
        }

        // X9
        remove_explicit_codes(&initial_types, &mut types, &mut levels);

        // X10: W1-W7, N1-N2, I1-I2 per level run
        for run in level_runs(&levels, base_level) {
            RunResolver::new(&run, &mut types, &mut levels).resolve();
        }

        reinsert_explicit_codes(&initial_types, &mut types, &mut levels, base_level);

        tracing::debug!(
            "Resolved bidi paragraph: {} characters, base level {}",
            levels.len(),
            base_level.number()
        );

        Self {
            base_level,
            initial_types,
            resolved_types: types,
            levels,
        }
    }

    /// P2/P3: First strong character decides, LTR when there is none
    fn determine_base_level(classes: &[BidiClass]) -> Level {
        match classes.iter().find(|c| c.is_strong()) {
            Some(BidiClass::R | BidiClass::AL) => Level::RTL,
            _ => Level::LTR,
        }
    }

    /// Base paragraph level
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Classes the paragraph was built from
    pub fn initial_types(&self) -> &[BidiClass] {
        &self.initial_types
    }

    /// Classes after resolution (explicit codes keep their original class)
    pub fn resolved_types(&self) -> &[BidiClass] {
        &self.resolved_types
    }

    /// Resolved levels before any per-line adjustment
    pub fn resolved_levels(&self) -> &[Level] {
        &self.levels
    }

    /// Levels with the whole paragraph treated as one line
    pub fn levels(&self) -> Vec<Level> {
        line_levels(&self.levels, &self.initial_types, self.base_level, &self.single_line())
    }

    /// Levels after rule L1 for the given line breaks
    ///
    /// `line_breaks` holds the end offset of each line; the last one must
    /// equal the paragraph length.
    pub fn levels_for_lines(&self, line_breaks: &[usize]) -> Result<Vec<Level>> {
        validate_line_breaks(line_breaks, self.len())?;
        Ok(line_levels(&self.levels, &self.initial_types, self.base_level, line_breaks))
    }

    /// Visual-to-logical index map, each line reordered on its own
    pub fn reordering(&self, line_breaks: &[usize]) -> Result<Vec<usize>> {
        let levels = self.levels_for_lines(line_breaks)?;
        Ok(reorder_lines(&levels, line_breaks))
    }

    fn single_line(&self) -> Vec<usize> {
        if self.is_empty() { Vec::new() } else { vec![self.len()] }
    }
}
