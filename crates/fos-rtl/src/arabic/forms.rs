//! Arabic presentation forms
//!
//! Lookup of the isolated/final/initial/medial presentation forms of the
//! letters in the Arabic block.

pub const HAMZA: u16 = 0x0621;
pub const ALEF_MADDA: u16 = 0x0622;
pub const ALEF_HAMZA: u16 = 0x0623;
pub const WAW_HAMZA: u16 = 0x0624;
pub const ALEF_HAMZA_BELOW: u16 = 0x0625;
pub const YEH_HAMZA: u16 = 0x0626;
pub const ALEF: u16 = 0x0627;
pub const TATWEEL: u16 = 0x0640;
pub const LAM: u16 = 0x0644;
pub const WAW: u16 = 0x0648;
pub const ALEF_MAKSURA: u16 = 0x0649;
pub const YEH: u16 = 0x064A;
pub const FATHATAN: u16 = 0x064B;
pub const DAMMATAN: u16 = 0x064C;
pub const KASRATAN: u16 = 0x064D;
pub const FATHA: u16 = 0x064E;
pub const DAMMA: u16 = 0x064F;
pub const KASRA: u16 = 0x0650;
pub const SHADDA: u16 = 0x0651;
pub const MADDA: u16 = 0x0653;
pub const HAMZA_ABOVE: u16 = 0x0654;
pub const HAMZA_BELOW: u16 = 0x0655;
pub const SUPERSCRIPT_ALEF: u16 = 0x0670;
pub const FARSI_YEH: u16 = 0x06CC;
pub const ZWJ: u16 = 0x200D;

// Lam-Alef ligatures, isolated form; final form is the next code point
pub const LAM_ALEF_MADDA: u16 = 0xFEF5;
pub const LAM_ALEF_HAMZA: u16 = 0xFEF7;
pub const LAM_ALEF_HAMZA_BELOW: u16 = 0xFEF9;
pub const LAM_ALEF: u16 = 0xFEFB;

/// Positional form index into a presentation form entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PositionalForm {
    /// Isolated form (no connections)
    Isolated = 0,
    /// Final form (connects to previous only)
    Final = 1,
    /// Initial form (connects to next only)
    Initial = 2,
    /// Medial form (connects both sides)
    Medial = 3,
}

impl PositionalForm {
    /// Form for an index already reduced modulo the letter's shape count
    pub fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => PositionalForm::Isolated,
            1 => PositionalForm::Final,
            2 => PositionalForm::Initial,
            _ => PositionalForm::Medial,
        }
    }
}

/// Harakat and other marks that attach to the preceding letter
pub fn is_vowel(unit: u16) -> bool {
    (FATHATAN..=HAMZA_BELOW).contains(&unit) || unit == SUPERSCRIPT_ALEF
}

fn forms_of(unit: u16) -> Option<&'static [u16]> {
    if !(HAMZA..=0x06D3).contains(&unit) {
        return None;
    }
    PRESENTATION_FORMS
        .binary_search_by_key(&unit, |&(base, _)| base)
        .ok()
        .map(|idx| PRESENTATION_FORMS[idx].1)
}

/// Number of joining shapes: 1, 2 (right-joining) or 4 (dual-joining)
pub fn shape_count(unit: u16) -> u8 {
    if unit == ZWJ {
        return 4;
    }
    if is_vowel(unit) {
        return 1;
    }
    forms_of(unit).map_or(1, |forms| forms.len() as u8)
}

/// Presentation form of `unit` for `form`, or `unit` itself when it has none
pub fn char_shape(unit: u16, form: PositionalForm) -> u16 {
    let index = form as usize;
    if let Some(forms) = forms_of(unit) {
        return forms.get(index).copied().unwrap_or(unit);
    }
    if (LAM_ALEF_MADDA..=LAM_ALEF).contains(&unit) {
        return unit + index as u16;
    }
    unit
}

/// Sorted (letter, [isolated, final, initial, medial]) presentation forms
static PRESENTATION_FORMS: &[(u16, &[u16])] = &[
    (0x0621, &[0xFE80]), // Hamza
    (0x0622, &[0xFE81, 0xFE82]), // Alef With Madda Above
    (0x0623, &[0xFE83, 0xFE84]), // Alef With Hamza Above
    (0x0624, &[0xFE85, 0xFE86]), // Waw With Hamza Above
    (0x0625, &[0xFE87, 0xFE88]), // Alef With Hamza Below
    (0x0626, &[0xFE89, 0xFE8A, 0xFE8B, 0xFE8C]), // Yeh With Hamza Above
    (0x0627, &[0xFE8D, 0xFE8E]), // Alef
    (0x0628, &[0xFE8F, 0xFE90, 0xFE91, 0xFE92]), // Beh
    (0x0629, &[0xFE93, 0xFE94]), // Teh Marbuta
    (0x062A, &[0xFE95, 0xFE96, 0xFE97, 0xFE98]), // Teh
    (0x062B, &[0xFE99, 0xFE9A, 0xFE9B, 0xFE9C]), // Theh
    (0x062C, &[0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0]), // Jeem
    (0x062D, &[0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4]), // Hah
    (0x062E, &[0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8]), // Khah
    (0x062F, &[0xFEA9, 0xFEAA]), // Dal
    (0x0630, &[0xFEAB, 0xFEAC]), // Thal
    (0x0631, &[0xFEAD, 0xFEAE]), // Reh
    (0x0632, &[0xFEAF, 0xFEB0]), // Zain
    (0x0633, &[0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4]), // Seen
    (0x0634, &[0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8]), // Sheen
    (0x0635, &[0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC]), // Sad
    (0x0636, &[0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0]), // Dad
    (0x0637, &[0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4]), // Tah
    (0x0638, &[0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8]), // Zah
    (0x0639, &[0xFEC9, 0xFECA, 0xFECB, 0xFECC]), // Ain
    (0x063A, &[0xFECD, 0xFECE, 0xFECF, 0xFED0]), // Ghain
    (0x0640, &[0x0640, 0x0640, 0x0640, 0x0640]), // Tatweel
    (0x0641, &[0xFED1, 0xFED2, 0xFED3, 0xFED4]), // Feh
    (0x0642, &[0xFED5, 0xFED6, 0xFED7, 0xFED8]), // Qaf
    (0x0643, &[0xFED9, 0xFEDA, 0xFEDB, 0xFEDC]), // Kaf
    (0x0644, &[0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0]), // Lam
    (0x0645, &[0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4]), // Meem
    (0x0646, &[0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8]), // Noon
    (0x0647, &[0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC]), // Heh
    (0x0648, &[0xFEED, 0xFEEE]), // Waw
    (0x0649, &[0xFEEF, 0xFEF0, 0xFBE8, 0xFBE9]), // Alef Maksura
    (0x064A, &[0xFEF1, 0xFEF2, 0xFEF3, 0xFEF4]), // Yeh
    (0x0671, &[0xFB50, 0xFB51]), // Alef Wasla
    (0x0679, &[0xFB66, 0xFB67, 0xFB68, 0xFB69]), // Tteh
    (0x067A, &[0xFB5E, 0xFB5F, 0xFB60, 0xFB61]), // Tteheh
    (0x067B, &[0xFB52, 0xFB53, 0xFB54, 0xFB55]), // Beeh
    (0x067E, &[0xFB56, 0xFB57, 0xFB58, 0xFB59]), // Peh
    (0x067F, &[0xFB62, 0xFB63, 0xFB64, 0xFB65]), // Teheh
    (0x0680, &[0xFB5A, 0xFB5B, 0xFB5C, 0xFB5D]), // Beheh
    (0x0683, &[0xFB76, 0xFB77, 0xFB78, 0xFB79]), // Nyeh
    (0x0684, &[0xFB72, 0xFB73, 0xFB74, 0xFB75]), // Dyeh
    (0x0686, &[0xFB7A, 0xFB7B, 0xFB7C, 0xFB7D]), // Tcheh
    (0x0687, &[0xFB7E, 0xFB7F, 0xFB80, 0xFB81]), // Tcheheh
    (0x0688, &[0xFB88, 0xFB89]), // Ddal
    (0x068C, &[0xFB84, 0xFB85]), // Dahal
    (0x068D, &[0xFB82, 0xFB83]), // Ddahal
    (0x068E, &[0xFB86, 0xFB87]), // Dul
    (0x0691, &[0xFB8C, 0xFB8D]), // Rreh
    (0x0698, &[0xFB8A, 0xFB8B]), // Jeh
    (0x06A4, &[0xFB6A, 0xFB6B, 0xFB6C, 0xFB6D]), // Veh
    (0x06A6, &[0xFB6E, 0xFB6F, 0xFB70, 0xFB71]), // Peheh
    (0x06A9, &[0xFB8E, 0xFB8F, 0xFB90, 0xFB91]), // Keheh
    (0x06AD, &[0xFBD3, 0xFBD4, 0xFBD5, 0xFBD6]), // Ng
    (0x06AF, &[0xFB92, 0xFB93, 0xFB94, 0xFB95]), // Gaf
    (0x06B1, &[0xFB9A, 0xFB9B, 0xFB9C, 0xFB9D]), // Ngoeh
    (0x06B3, &[0xFB96, 0xFB97, 0xFB98, 0xFB99]), // Gueh
    (0x06BA, &[0xFB9E, 0xFB9F]), // Noon Ghunna
    (0x06BB, &[0xFBA0, 0xFBA1, 0xFBA2, 0xFBA3]), // Rnoon
    (0x06BE, &[0xFBAA, 0xFBAB, 0xFBAC, 0xFBAD]), // Heh Doachashmee
    (0x06C0, &[0xFBA4, 0xFBA5]), // Heh With Yeh Above
    (0x06C1, &[0xFBA6, 0xFBA7, 0xFBA8, 0xFBA9]), // Heh Goal
    (0x06C5, &[0xFBE0, 0xFBE1]), // Kirghiz Oe
    (0x06C6, &[0xFBD9, 0xFBDA]), // Oe
    (0x06C7, &[0xFBD7, 0xFBD8]), // U
    (0x06C8, &[0xFBDB, 0xFBDC]), // Yu
    (0x06C9, &[0xFBE2, 0xFBE3]), // Kirghiz Yu
    (0x06CB, &[0xFBDE, 0xFBDF]), // Ve
    (0x06CC, &[0xFBFC, 0xFBFD, 0xFBFE, 0xFBFF]), // Farsi Yeh
    (0x06D0, &[0xFBE4, 0xFBE5, 0xFBE6, 0xFBE7]), // E
    (0x06D2, &[0xFBAE, 0xFBAF]), // Yeh Barree
    (0x06D3, &[0xFBB0, 0xFBB1]), // Yeh Barree With Hamza Above
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        for pair in PRESENTATION_FORMS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert!(PRESENTATION_FORMS.iter().all(|(_, f)| matches!(f.len(), 1 | 2 | 4)));
    }

    #[test]
    fn test_shape_count() {
        assert_eq!(shape_count(HAMZA), 1);
        assert_eq!(shape_count(ALEF), 2);
        assert_eq!(shape_count(0x0628), 4); // Beh
        assert_eq!(shape_count(FATHA), 1);
        assert_eq!(shape_count(ZWJ), 4);
        assert_eq!(shape_count(u16::from(b' ')), 1);
        assert_eq!(shape_count(0x063B), 1); // unassigned in the table
    }

    #[test]
    fn test_char_shape() {
        assert_eq!(char_shape(0x0628, PositionalForm::Isolated), 0xFE8F);
        assert_eq!(char_shape(0x0628, PositionalForm::Final), 0xFE90);
        assert_eq!(char_shape(0x0628, PositionalForm::Initial), 0xFE91);
        assert_eq!(char_shape(0x0628, PositionalForm::Medial), 0xFE92);
        assert_eq!(char_shape(TATWEEL, PositionalForm::Medial), TATWEEL);
        assert_eq!(char_shape(LAM_ALEF, PositionalForm::Final), 0xFEFC);
        assert_eq!(char_shape(ZWJ, PositionalForm::Medial), ZWJ);
    }

    #[test]
    fn test_is_vowel() {
        assert!(is_vowel(FATHA));
        assert!(is_vowel(SHADDA));
        assert!(is_vowel(SUPERSCRIPT_ALEF));
        assert!(!is_vowel(ALEF));
    }
}
