//! Removal and reinsertion of explicit codes (rule X9)
//!
//! Embedding initiators, PDF and boundary neutrals take no part in weak,
//! neutral or implicit resolution. They are compacted out of the working
//! arrays beforehand and put back afterwards with the level of the
//! preceding character, so the final arrays line up with the input.

use super::{BidiClass, Level};

/// X9: Drop removed codes from the working arrays, shrinking them in place
pub fn remove_explicit_codes(initial: &[BidiClass], types: &mut Vec<BidiClass>, levels: &mut Vec<Level>) {
    debug_assert_eq!(initial.len(), types.len());
    debug_assert_eq!(initial.len(), levels.len());

    let mut kept = 0;
    for (i, class) in initial.iter().enumerate() {
        if !class.is_removed_by_x9() {
            types[kept] = types[i];
            levels[kept] = levels[i];
            kept += 1;
        }
    }

    types.truncate(kept);
    levels.truncate(kept);
}

/// Restore the working arrays to the original length
///
/// Removed positions get back their original type and inherit the level
/// of the preceding character; a removed code at position 0 takes the
/// paragraph level.
pub fn reinsert_explicit_codes(
    initial: &[BidiClass],
    types: &mut Vec<BidiClass>,
    levels: &mut Vec<Level>,
    paragraph: Level,
) {
    let mut remaining = types.len();
    let mut restored_types = initial.to_vec();
    let mut slots: Vec<Option<Level>> = vec![None; initial.len()];

    for i in (0..initial.len()).rev() {
        if !initial[i].is_removed_by_x9() {
            remaining -= 1;
            restored_types[i] = types[remaining];
            slots[i] = Some(levels[remaining]);
        }
    }
    debug_assert_eq!(remaining, 0);

    levels.clear();
    let mut previous = paragraph;
    for slot in slots {
        let level = slot.unwrap_or(previous);
        levels.push(level);
        previous = level;
    }

    *types = restored_types;
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    #[test]
    fn test_remove_compacts_in_order() {
        let initial = [L, RLE, R, BN, PDF, EN];
        let mut types = initial.to_vec();
        let mut levels = vec![Level(0), Level(0), Level(1), Level(1), Level(1), Level(0)];

        remove_explicit_codes(&initial, &mut types, &mut levels);

        assert_eq!(types, vec![L, R, EN]);
        assert_eq!(levels, vec![Level(0), Level(1), Level(0)]);
    }

    #[test]
    fn test_reinsert_restores_length_and_types() {
        let initial = [L, RLE, R, BN, PDF, EN];
        let mut types = vec![L, R, L];
        let mut levels = vec![Level(0), Level(1), Level(2)];

        reinsert_explicit_codes(&initial, &mut types, &mut levels, Level(0));

        assert_eq!(types, vec![L, RLE, R, BN, PDF, L]);
        assert_eq!(
            levels,
            vec![Level(0), Level(0), Level(1), Level(1), Level(1), Level(2)]
        );
    }

    #[test]
    fn test_leading_removed_code_takes_paragraph_level() {
        let initial = [BN, BN, R];
        let mut types = vec![R];
        let mut levels = vec![Level(3)];

        reinsert_explicit_codes(&initial, &mut types, &mut levels, Level(1));

        assert_eq!(levels, vec![Level(1), Level(1), Level(3)]);
    }

    #[test]
    fn test_all_removed() {
        let initial = [LRE, PDF];
        let mut types = initial.to_vec();
        let mut levels = vec![Level(0), Level(2)];

        remove_explicit_codes(&initial, &mut types, &mut levels);
        assert!(types.is_empty());

        reinsert_explicit_codes(&initial, &mut types, &mut levels, Level(0));
        assert_eq!(types, vec![LRE, PDF]);
        assert_eq!(levels, vec![Level(0), Level(0)]);
    }
}
