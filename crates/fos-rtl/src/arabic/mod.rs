//! Arabic shaping
//!
//! Contextual shaping of Arabic letters into presentation forms, followed
//! by optional ligature composition.

pub mod forms;
mod ligature;
mod shaper;

pub use ligature::compose_ligatures;
pub use shaper::ArabicShaper;

use crate::options::ShapingOptions;

/// Shape a run of Arabic text given in logical order
///
/// The output may be shorter than the input: marks fold into their base,
/// Lam-Alef pairs fuse, and vowels can be dropped or composed depending on
/// `options`.
pub fn shape_arabic(text: &[u16], options: &ShapingOptions) -> Vec<u16> {
    let shaped = ArabicShaper::shape(text, *options);

    if !options.needs_ligature_pass() {
        tracing::debug!("Shaped {} Arabic units into {}", text.len(), shaped.len());
        return shaped;
    }

    let composed = compose_ligatures(&shaped, options);
    tracing::debug!(
        "Shaped {} Arabic units into {} ({} after ligatures)",
        text.len(),
        shaped.len(),
        composed.len()
    );
    composed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_then_ligate() {
        // Lam Jeem: initial Lam + final Jeem, then the Lam-Jeem ligature
        let text = [0x0644, 0x062C];
        assert_eq!(shape_arabic(&text, &ShapingOptions::default()), vec![0xFEDF, 0xFE9E]);

        let options = ShapingOptions::new().ligatures(true);
        assert_eq!(shape_arabic(&text, &options), vec![0xFC3F]);
    }

    #[test]
    fn test_composed_shadda() {
        let text = [0x0628, forms::SHADDA, forms::FATHA];
        let options = ShapingOptions::new().compose_tashkeel(true);
        assert_eq!(shape_arabic(&text, &options), vec![0xFE8F, 0xFC60]);
    }
}
