//! Digit shaping
//!
//! Converts between European digits and the Arabic-Indic digit sets,
//! either unconditionally or depending on the preceding strong character.

use crate::bidi::BidiClass;
use crate::options::{DigitMode, DigitOptions};

const EUROPEAN_ZERO: u16 = 0x0030;
const EUROPEAN_NINE: u16 = 0x0039;

/// Shape digits in place according to `options`
pub fn shape_digits(text: &mut [u16], options: &DigitOptions) {
    let zero = options.digit_type.zero();

    match options.mode {
        DigitMode::None => {}
        DigitMode::EuropeanToArabic => {
            for unit in text.iter_mut().filter(|u| (EUROPEAN_ZERO..=EUROPEAN_NINE).contains(&**u)) {
                *unit = *unit - EUROPEAN_ZERO + zero;
            }
        }
        DigitMode::ArabicToEuropean => {
            for unit in text.iter_mut().filter(|u| (zero..=zero + 9).contains(&**u)) {
                *unit = *unit - zero + EUROPEAN_ZERO;
            }
        }
        DigitMode::EuropeanToArabicContextLtr => shape_with_context(text, zero, false),
        DigitMode::EuropeanToArabicContextAl => shape_with_context(text, zero, true),
    }
}

/// European digits become Arabic-Indic only when the last strong character was AL
fn shape_with_context(text: &mut [u16], zero: u16, mut last_strong_was_al: bool) {
    for unit in text.iter_mut() {
        match BidiClass::of(*unit) {
            BidiClass::L | BidiClass::R => last_strong_was_al = false,
            BidiClass::AL => last_strong_was_al = true,
            // Other EN digits (superscripts, extended Arabic-Indic) stay as they are
            BidiClass::EN if last_strong_was_al && *unit <= EUROPEAN_NINE => {
                *unit = *unit - EUROPEAN_ZERO + zero;
            }
            _ => {}
        }
    }
}
