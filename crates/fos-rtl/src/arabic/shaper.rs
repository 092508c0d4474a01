//! Arabic contextual shaping
//!
//! Letters are collected into shaping units (a base letter plus an
//! optional mark and vowel). A unit's joining form depends on both of its
//! neighbours, so the shaper keeps two units in flight: the one still
//! being composed and the previous one, already shaped and waiting to be
//! written out. Input is consumed in logical order.

use super::forms::{
    self, ALEF, ALEF_HAMZA, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAKSURA, FARSI_YEH, HAMZA_ABOVE,
    HAMZA_BELOW, LAM, LAM_ALEF, LAM_ALEF_HAMZA, LAM_ALEF_HAMZA_BELOW, LAM_ALEF_MADDA, MADDA,
    PositionalForm, SHADDA, WAW, WAW_HAMZA, YEH, YEH_HAMZA,
};
use crate::options::ShapingOptions;

/// Outcome of offering a character to the unit being composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    /// Not merged; the unit is complete
    None,
    /// Absorbed as a mark or vowel
    Mark,
    /// Absorbed by replacing the base with a precomposed letter
    Precomposed,
    /// Lam and Alef fused into a two-shape ligature
    LamAlef,
}

/// One output unit, possibly absorbing several input characters
#[derive(Debug, Clone, Copy)]
struct ShapingUnit {
    base: Option<u16>,
    mark: Option<u16>,
    vowel: Option<u16>,
    /// Input characters represented by this unit
    absorbed: usize,
    /// Joining shapes of the base: 1, 2 or 4
    shapes: u8,
}

impl Default for ShapingUnit {
    fn default() -> Self {
        Self {
            base: None,
            mark: None,
            vowel: None,
            absorbed: 0,
            shapes: 1,
        }
    }
}

impl ShapingUnit {
    fn new(base: u16) -> Self {
        Self {
            base: Some(base),
            absorbed: 1,
            shapes: forms::shape_count(base),
            ..Self::default()
        }
    }

    fn connects_to_left(&self) -> bool {
        self.shapes > 2
    }

    /// Try to fold `unit` into this shaping unit
    fn merge(&mut self, unit: u16) -> Merge {
        let Some(base) = self.base else {
            return Merge::None;
        };

        if forms::is_vowel(unit) {
            return self.merge_vowel(base, unit);
        }

        // A vowel already sits on the base; nothing else can join it.
        if self.vowel.is_some() || base != LAM {
            return Merge::None;
        }

        let ligature = match unit {
            ALEF => LAM_ALEF,
            ALEF_HAMZA => LAM_ALEF_HAMZA,
            ALEF_HAMZA_BELOW => LAM_ALEF_HAMZA_BELOW,
            ALEF_MADDA => LAM_ALEF_MADDA,
            _ => return Merge::None,
        };
        self.base = Some(ligature);
        self.shapes = 2;
        self.absorbed += 1;
        Merge::LamAlef
    }

    fn merge_vowel(&mut self, base: u16, vowel: u16) -> Merge {
        // A second vowel replaces the first one
        let mut result = if self.vowel.is_some() && vowel != SHADDA {
            Merge::Precomposed
        } else {
            Merge::Mark
        };

        match vowel {
            SHADDA => {
                if self.mark.is_some() {
                    return Merge::None;
                }
                self.mark = Some(SHADDA);
            }
            HAMZA_BELOW => match base {
                ALEF => self.precompose(ALEF_HAMZA_BELOW, &mut result),
                LAM_ALEF => self.precompose(LAM_ALEF_HAMZA_BELOW, &mut result),
                _ => self.mark = Some(HAMZA_BELOW),
            },
            HAMZA_ABOVE => match base {
                ALEF => self.precompose(ALEF_HAMZA, &mut result),
                LAM_ALEF => self.precompose(LAM_ALEF_HAMZA, &mut result),
                WAW => self.precompose(WAW_HAMZA, &mut result),
                YEH | ALEF_MAKSURA | FARSI_YEH => self.precompose(YEH_HAMZA, &mut result),
                _ => self.mark = Some(HAMZA_ABOVE),
            },
            // Madda only combines with a bare Alef; elsewhere it is dropped.
            MADDA => {
                if base == ALEF {
                    self.precompose(ALEF_MADDA, &mut result);
                }
            }
            _ => self.vowel = Some(vowel),
        }

        self.absorbed += 1;
        result
    }

    fn precompose(&mut self, letter: u16, result: &mut Merge) {
        self.base = Some(letter);
        *result = Merge::Precomposed;
    }

    /// Replace the base with its presentation form
    fn apply_form(&mut self, index: u8) {
        if let Some(base) = self.base {
            let form = PositionalForm::from_index(index % self.shapes);
            self.base = Some(forms::char_shape(base, form));
        }
    }
}

/// Streaming Arabic shaper with one unit of lookahead
#[derive(Debug)]
pub struct ArabicShaper {
    options: ShapingOptions,
    /// Shaped, waiting to be written out
    previous: ShapingUnit,
    /// Still accepting marks and ligature partners
    current: ShapingUnit,
    output: Vec<u16>,
    /// Input characters folded into written units
    consumed: usize,
}

impl ArabicShaper {
    /// Create a new shaper
    pub fn new(options: ShapingOptions) -> Self {
        Self {
            options,
            previous: ShapingUnit::default(),
            current: ShapingUnit::default(),
            output: Vec::new(),
            consumed: 0,
        }
    }

    /// Shape a complete run of code units
    pub fn shape(text: &[u16], options: ShapingOptions) -> Vec<u16> {
        let mut shaper = Self::new(options);
        shaper.output.reserve(text.len());
        for &unit in text {
            shaper.feed(unit);
        }
        shaper.finish()
    }

    /// Input characters represented by the units written so far
    ///
    /// Marks, precomposed hamzas and Lam-Alef partners count toward the
    /// unit that absorbed them, so this can exceed the output length.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Feed the next code unit in logical order
    pub fn feed(&mut self, unit: u16) {
        if self.current.merge(unit) != Merge::None {
            return;
        }

        // The incoming character decides whether the current unit joins
        // forward; the previous unit decides whether it joins backward.
        let incoming_shapes = forms::shape_count(unit);
        let mut form = if incoming_shapes == 1 { 0 } else { 2 };
        if self.previous.connects_to_left() {
            form += 1;
        }
        self.current.apply_form(form);

        let finished = std::mem::replace(&mut self.current, ShapingUnit::new(unit));
        let shaped = std::mem::replace(&mut self.previous, finished);
        self.emit(shaped);
    }

    /// Flush the two held units and return the shaped text
    pub fn finish(mut self) -> Vec<u16> {
        let form = if self.previous.connects_to_left() { 1 } else { 0 };
        self.current.apply_form(form);

        let previous = self.previous;
        let current = self.current;
        self.emit(previous);
        self.emit(current);

        tracing::trace!("Arabic shaper consumed {} characters", self.consumed);
        self.output
    }

    fn emit(&mut self, unit: ShapingUnit) {
        let Some(base) = unit.base else {
            return;
        };
        self.output.push(base);
        self.consumed += unit.absorbed;

        if self.options.eliminate_vowels {
            return;
        }
        self.output.extend(unit.mark);
        self.output.extend(unit.vowel);
    }
}
