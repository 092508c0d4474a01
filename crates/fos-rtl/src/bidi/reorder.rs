//! Line levels and visual reordering (rules L1-L2)

use super::{BidiClass, Level};
use crate::{Result, TextError};

/// Check that line breaks are strictly increasing and end at the text length
pub fn validate_line_breaks(line_breaks: &[usize], length: usize) -> Result<()> {
    let mut previous = 0;
    for (index, &offset) in line_breaks.iter().enumerate() {
        if offset <= previous {
            return Err(TextError::InvalidLineBreak { index, offset });
        }
        previous = offset;
    }

    if previous != length {
        return Err(TextError::LineBreaksIncomplete { last: previous, length });
    }
    Ok(())
}

/// L1: Reset separators and trailing whitespace to the paragraph level
///
/// `line_breaks` must already be validated.
pub fn line_levels(
    levels: &[Level],
    initial: &[BidiClass],
    paragraph: Level,
    line_breaks: &[usize],
) -> Vec<Level> {
    let mut result = levels.to_vec();

    for i in 0..result.len() {
        if matches!(initial[i], BidiClass::B | BidiClass::S) {
            result[i] = paragraph;
            reset_trailing_whitespace(&mut result[..i], &initial[..i], paragraph);
        }
    }

    let mut start = 0;
    for &limit in line_breaks {
        reset_trailing_whitespace(&mut result[start..limit], &initial[start..limit], paragraph);
        start = limit;
    }

    result
}

/// Walk backwards from the end of the slice over whitespace and removed codes
fn reset_trailing_whitespace(levels: &mut [Level], initial: &[BidiClass], paragraph: Level) {
    for (level, class) in levels.iter_mut().zip(initial).rev() {
        if !class.is_whitespace() {
            break;
        }
        *level = paragraph;
    }
}

/// Visual-to-logical map for several lines, each reordered independently
pub fn reorder_lines(levels: &[Level], line_breaks: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(levels.len());
    let mut start = 0;

    for &limit in line_breaks {
        result.extend(reorder_line(&levels[start..limit]).into_iter().map(|i| i + start));
        start = limit;
    }

    result
}

/// L2: Visual-to-logical map for a single line
///
/// From the highest level down to the lowest odd level, every maximal
/// sequence at that level or above is reversed.
pub fn reorder_line(levels: &[Level]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();

    let highest = levels.iter().map(|l| l.number()).max().unwrap_or(0);
    let Some(lowest_odd) = levels.iter().map(|l| l.number()).filter(|l| l & 1 == 1).min() else {
        return order;
    };

    for level in (lowest_odd..=highest).rev() {
        let mut i = 0;
        while i < levels.len() {
            if levels[i].number() < level {
                i += 1;
                continue;
            }
            let start = i;
            while i < levels.len() && levels[i].number() >= level {
                i += 1;
            }
            order[start..i].reverse();
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    fn lv(levels: &[u8]) -> Vec<Level> {
        levels.iter().map(|&l| Level(l)).collect()
    }

    #[test]
    fn test_validate_line_breaks() {
        assert!(validate_line_breaks(&[2, 5], 5).is_ok());
        assert!(validate_line_breaks(&[], 0).is_ok());
        assert_eq!(
            validate_line_breaks(&[3, 3, 5], 5),
            Err(TextError::InvalidLineBreak { index: 1, offset: 3 })
        );
        assert_eq!(
            validate_line_breaks(&[0, 5], 5),
            Err(TextError::InvalidLineBreak { index: 0, offset: 0 })
        );
        assert_eq!(
            validate_line_breaks(&[2, 4], 5),
            Err(TextError::LineBreaksIncomplete { last: 4, length: 5 })
        );
    }

    #[test]
    fn test_reorder_line_ltr() {
        assert_eq!(reorder_line(&lv(&[0, 0, 0])), vec![0, 1, 2]);
        assert_eq!(reorder_line(&lv(&[0, 2, 2])), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_line_rtl() {
        assert_eq!(reorder_line(&lv(&[1, 1, 1])), vec![2, 1, 0]);
    }

    #[test]
    fn test_reorder_line_nested_numbers() {
        // R R EN EN R at paragraph level 1
        assert_eq!(reorder_line(&lv(&[1, 1, 2, 2, 1])), vec![4, 2, 3, 1, 0]);
    }

    #[test]
    fn test_reorder_line_mixed() {
        assert_eq!(reorder_line(&lv(&[0, 0, 1, 1, 0])), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_line_levels_trailing_whitespace() {
        let initial = [R, WS, R, WS, WS];
        let levels = lv(&[1, 1, 1, 1, 1]);
        let result = line_levels(&levels, &initial, Level(0), &[2, 5]);
        assert_eq!(result, lv(&[1, 0, 1, 0, 0]));
    }

    #[test]
    fn test_line_levels_segment_separator() {
        let initial = [L, R, WS, BN, S, R];
        let levels = lv(&[2, 3, 3, 3, 3, 3]);
        let result = line_levels(&levels, &initial, Level(0), &[6]);
        assert_eq!(result, lv(&[2, 3, 0, 0, 0, 3]));
    }

    #[test]
    fn test_reorder_lines_offsets() {
        let levels = lv(&[1, 1, 0, 1, 1]);
        assert_eq!(reorder_lines(&levels, &[2, 5]), vec![1, 0, 2, 4, 3]);
    }
}
