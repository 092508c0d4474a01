//! Text processing options
//!
//! Option sets handed down by the document layer. They serialize with
//! serde so documents can persist them alongside run direction settings.

use serde::{Deserialize, Serialize};

use crate::TextError;

/// Paragraph embedding level requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphLevel {
    /// Derived from the first strong character
    #[default]
    Auto,
    /// Level 0
    Ltr,
    /// Level 1
    Rtl,
}

impl ParagraphLevel {
    /// Raw level as stored by the document layer (-1 for auto)
    pub fn to_raw(self) -> i8 {
        match self {
            ParagraphLevel::Auto => -1,
            ParagraphLevel::Ltr => 0,
            ParagraphLevel::Rtl => 1,
        }
    }
}

impl TryFrom<i8> for ParagraphLevel {
    type Error = TextError;

    fn try_from(level: i8) -> Result<Self, TextError> {
        match level {
            -1 => Ok(ParagraphLevel::Auto),
            0 => Ok(ParagraphLevel::Ltr),
            1 => Ok(ParagraphLevel::Rtl),
            other => Err(TextError::InvalidParagraphLevel(other)),
        }
    }
}

/// Arabic shaping options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingOptions {
    /// Drop marks and vowels from the shaped output
    pub eliminate_vowels: bool,
    /// Merge Shadda with a following or preceding vowel
    pub compose_tashkeel: bool,
    /// Merge initial/medial letter pairs into ligatures
    pub ligatures: bool,
}

impl ShapingOptions {
    /// Create options with everything disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vowel elimination
    pub fn eliminate_vowels(mut self, enabled: bool) -> Self {
        self.eliminate_vowels = enabled;
        self
    }

    /// Set composed tashkeel
    pub fn compose_tashkeel(mut self, enabled: bool) -> Self {
        self.compose_tashkeel = enabled;
        self
    }

    /// Set presentation ligatures
    pub fn ligatures(mut self, enabled: bool) -> Self {
        self.ligatures = enabled;
        self
    }

    /// Whether the second, ligature-composing pass has anything to do
    pub fn needs_ligature_pass(&self) -> bool {
        self.compose_tashkeel || self.ligatures
    }
}

/// Digit conversion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitMode {
    /// Leave digits alone
    #[default]
    None,
    /// Every European digit becomes Arabic-Indic
    EuropeanToArabic,
    /// Every Arabic-Indic digit becomes European
    ArabicToEuropean,
    /// European digits following an Arabic letter become Arabic-Indic,
    /// starting from a left-to-right context
    EuropeanToArabicContextLtr,
    /// As above, starting from an Arabic letter context
    EuropeanToArabicContextAl,
}

/// Arabic digit shapes targeted by [`DigitMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitType {
    /// U+0660..U+0669
    #[default]
    ArabicIndic,
    /// U+06F0..U+06F9 (Persian and Urdu)
    ExtendedArabicIndic,
}

impl DigitType {
    /// Code unit of digit zero
    pub fn zero(self) -> u16 {
        match self {
            DigitType::ArabicIndic => 0x0660,
            DigitType::ExtendedArabicIndic => 0x06F0,
        }
    }
}

/// Digit shaping options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitOptions {
    /// Conversion direction and context rule
    pub mode: DigitMode,
    /// Target Arabic-Indic digit set
    pub digit_type: DigitType,
}

impl DigitOptions {
    /// Create digit options
    pub fn new(mode: DigitMode, digit_type: DigitType) -> Self {
        Self { mode, digit_type }
    }
}

// Packed option word used by the PDF document layer
const NO_VOWEL: u32 = 0x1;
const COMPOSED_TASHKEEL: u32 = 0x4;
const LIGATURES: u32 = 0x8;
const DIGITS_EN2AN: u32 = 0x20;
const DIGITS_AN2EN: u32 = 0x40;
const DIGITS_EN2AN_INIT_LR: u32 = 0x60;
const DIGITS_EN2AN_INIT_AL: u32 = 0x80;
const DIGITS_MASK: u32 = 0xE0;
const DIGIT_TYPE_AN_EXTENDED: u32 = 0x100;

/// All options for a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub shaping: ShapingOptions,
    pub digits: DigitOptions,
}

impl TextOptions {
    /// Decode a packed option word; unknown digit modes decode as [`DigitMode::None`]
    pub fn from_bits(bits: u32) -> Self {
        let shaping = ShapingOptions {
            eliminate_vowels: bits & NO_VOWEL != 0,
            compose_tashkeel: bits & COMPOSED_TASHKEEL != 0,
            ligatures: bits & LIGATURES != 0,
        };

        let mode = match bits & DIGITS_MASK {
            DIGITS_EN2AN => DigitMode::EuropeanToArabic,
            DIGITS_AN2EN => DigitMode::ArabicToEuropean,
            DIGITS_EN2AN_INIT_LR => DigitMode::EuropeanToArabicContextLtr,
            DIGITS_EN2AN_INIT_AL => DigitMode::EuropeanToArabicContextAl,
            _ => DigitMode::None,
        };
        let digit_type = if bits & DIGIT_TYPE_AN_EXTENDED != 0 {
            DigitType::ExtendedArabicIndic
        } else {
            DigitType::ArabicIndic
        };

        Self {
            shaping,
            digits: DigitOptions { mode, digit_type },
        }
    }

    /// Encode as a packed option word
    pub fn to_bits(&self) -> u32 {
        let mut bits = 0;
        if self.shaping.eliminate_vowels {
            bits |= NO_VOWEL;
        }
        if self.shaping.compose_tashkeel {
            bits |= COMPOSED_TASHKEEL;
        }
        if self.shaping.ligatures {
            bits |= LIGATURES;
        }
        bits |= match self.digits.mode {
            DigitMode::None => 0,
            DigitMode::EuropeanToArabic => DIGITS_EN2AN,
            DigitMode::ArabicToEuropean => DIGITS_AN2EN,
            DigitMode::EuropeanToArabicContextLtr => DIGITS_EN2AN_INIT_LR,
            DigitMode::EuropeanToArabicContextAl => DIGITS_EN2AN_INIT_AL,
        };
        if self.digits.digit_type == DigitType::ExtendedArabicIndic {
            bits |= DIGIT_TYPE_AN_EXTENDED;
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_level_from_raw() {
        assert_eq!(ParagraphLevel::try_from(-1), Ok(ParagraphLevel::Auto));
        assert_eq!(ParagraphLevel::try_from(1), Ok(ParagraphLevel::Rtl));
        assert_eq!(ParagraphLevel::try_from(5), Err(TextError::InvalidParagraphLevel(5)));
        assert_eq!(ParagraphLevel::Rtl.to_raw(), 1);
    }

    #[test]
    fn test_shaping_builder() {
        let options = ShapingOptions::new().ligatures(true);
        assert!(options.needs_ligature_pass());
        assert!(!ShapingOptions::new().eliminate_vowels(true).needs_ligature_pass());
    }

    #[test]
    fn test_from_bits() {
        let options = TextOptions::from_bits(0x1 | 0x8 | 0x60 | 0x100);
        assert!(options.shaping.eliminate_vowels);
        assert!(!options.shaping.compose_tashkeel);
        assert!(options.shaping.ligatures);
        assert_eq!(options.digits.mode, DigitMode::EuropeanToArabicContextLtr);
        assert_eq!(options.digits.digit_type, DigitType::ExtendedArabicIndic);
        assert_eq!(options.to_bits(), 0x169);
    }

    #[test]
    fn test_reserved_digit_mode() {
        assert_eq!(TextOptions::from_bits(0xA0).digits.mode, DigitMode::None);
    }

    #[test]
    fn test_digit_zero() {
        assert_eq!(DigitType::ArabicIndic.zero(), 0x0660);
        assert_eq!(DigitType::ExtendedArabicIndic.zero(), 0x06F0);
    }
}
