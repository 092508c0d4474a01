//! Presentation-form ligatures
//!
//! Runs after contextual shaping, so the tables are keyed on presentation
//! forms rather than nominal letters. Matching is greedy, left to right,
//! over adjacent pairs.

use super::forms::{DAMMA, DAMMATAN, FATHA, KASRA, KASRATAN, SHADDA};
use crate::options::ShapingOptions;

/// Shadda combined with a following (or, for the short vowels, preceding)
/// vowel
const TASHKEEL_LIGATURES: &[(u16, u16)] = &[
    (KASRA, 0xFC62),
    (FATHA, 0xFC60),
    (DAMMA, 0xFC61),
    (DAMMATAN, 0xFC5E),
    (KASRATAN, 0xFC5F),
];

/// (first form, second form, ligature)
const PRESENTATION_LIGATURES: &[(u16, u16, u16)] = &[
    // Lam initial
    (0xFEDF, 0xFE9E, 0xFC3F),
    (0xFEDF, 0xFEA0, 0xFCC9),
    (0xFEDF, 0xFEA2, 0xFC40),
    (0xFEDF, 0xFEA4, 0xFCCA),
    (0xFEDF, 0xFEA6, 0xFC41),
    (0xFEDF, 0xFEA8, 0xFCCB),
    (0xFEDF, 0xFEE2, 0xFC42),
    (0xFEDF, 0xFEE4, 0xFCCC),
    // Teh initial
    (0xFE97, 0xFEA0, 0xFCA1),
    (0xFE97, 0xFEA4, 0xFCA2),
    (0xFE97, 0xFEA8, 0xFCA3),
    // Beh initial
    (0xFE91, 0xFEA0, 0xFC9C),
    (0xFE91, 0xFEA4, 0xFC9D),
    (0xFE91, 0xFEA8, 0xFC9E),
    // Noon initial
    (0xFEE7, 0xFEA0, 0xFCD2),
    (0xFEE7, 0xFEA4, 0xFCD3),
    (0xFEE7, 0xFEA8, 0xFCD4),
    // Noon medial
    (0xFEE8, 0xFEAE, 0xFC8A),
    (0xFEE8, 0xFEB0, 0xFC8B),
    // Meem initial
    (0xFEE3, 0xFEA0, 0xFCCE),
    (0xFEE3, 0xFEA4, 0xFCCF),
    (0xFEE3, 0xFEA8, 0xFCD0),
    (0xFEE3, 0xFEE4, 0xFCD1),
    // Feh initial
    (0xFED3, 0xFEF2, 0xFC32),
];

fn tashkeel_ligature(first: u16, second: u16) -> Option<u16> {
    let (vowel, reversed) = if first == SHADDA {
        (second, false)
    } else if second == SHADDA {
        (first, true)
    } else {
        return None;
    };

    TASHKEEL_LIGATURES
        .iter()
        .find(|&&(v, _)| v == vowel)
        .filter(|&&(v, _)| !reversed || matches!(v, KASRA | FATHA | DAMMA))
        .map(|&(_, ligature)| ligature)
}

fn presentation_ligature(first: u16, second: u16) -> Option<u16> {
    PRESENTATION_LIGATURES
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, ligature)| ligature)
}

/// Replace adjacent pairs with their ligature forms
///
/// Only the tables enabled in `options` are consulted; with neither
/// enabled the text is returned unchanged.
pub fn compose_ligatures(text: &[u16], options: &ShapingOptions) -> Vec<u16> {
    let mut output = Vec::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        if let Some(&next) = text.get(i + 1) {
            let current = text[i];
            let ligature = options
                .compose_tashkeel
                .then(|| tashkeel_ligature(current, next))
                .flatten()
                .or_else(|| {
                    options
                        .ligatures
                        .then(|| presentation_ligature(current, next))
                        .flatten()
                });

            if let Some(ligature) = ligature {
                output.push(ligature);
                i += 2;
                continue;
            }
        }

        output.push(text[i]);
        i += 1;
    }

    output
}
