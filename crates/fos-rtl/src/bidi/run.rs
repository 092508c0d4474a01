//! Level run resolution (rules W1-W7, N1-N2, I1-I2)
//!
//! Runs are maximal spans of one explicit level in the compacted arrays.
//! Each run is resolved on its own, seeing its neighbours only through
//! the `sor`/`eor` boundary types.

use super::{BidiClass, Level};

/// A maximal span of one explicit level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRun {
    /// Start index (inclusive)
    pub start: usize,
    /// End index (exclusive)
    pub end: usize,
    /// Explicit level shared by the run
    pub level: Level,
    /// Start-of-run boundary type
    pub sor: BidiClass,
    /// End-of-run boundary type
    pub eor: BidiClass,
}

/// Split explicit levels into level runs with their boundary types
pub fn level_runs(levels: &[Level], paragraph: Level) -> Vec<LevelRun> {
    let mut runs = Vec::new();
    let mut previous = paragraph;
    let mut start = 0;

    while start < levels.len() {
        let level = levels[start];
        let mut end = start + 1;
        while end < levels.len() && levels[end] == level {
            end += 1;
        }
        let next = levels.get(end).copied().unwrap_or(paragraph);

        runs.push(LevelRun {
            start,
            end,
            level,
            sor: previous.max(level).strong_type(),
            eor: next.max(level).strong_type(),
        });

        previous = level;
        start = end;
    }

    runs
}

/// Resolves the types and levels of one level run in place
pub struct RunResolver<'a> {
    types: &'a mut [BidiClass],
    levels: &'a mut [Level],
    level: Level,
    sor: BidiClass,
    eor: BidiClass,
}

impl<'a> RunResolver<'a> {
    /// Borrow the run's slice of the compacted arrays
    pub fn new(run: &LevelRun, types: &'a mut [BidiClass], levels: &'a mut [Level]) -> Self {
        Self {
            types: &mut types[run.start..run.end],
            levels: &mut levels[run.start..run.end],
            level: run.level,
            sor: run.sor,
            eor: run.eor,
        }
    }

    /// Apply weak, neutral and implicit rules, in that order
    pub fn resolve(mut self) {
        self.resolve_weak();
        self.resolve_neutral();
        self.resolve_implicit();
    }

    /// W1-W7: Resolve weak types
    fn resolve_weak(&mut self) {
        let types = &mut *self.types;
        let len = types.len();

        // W1: NSM gets type of previous
        let mut preceding = self.sor;
        for class in types.iter_mut() {
            if *class == BidiClass::NSM {
                *class = preceding;
            } else {
                preceding = *class;
            }
        }

        // W2: EN after AL becomes AN
        for i in 0..len {
            if types[i] == BidiClass::EN
                && types[..i].iter().rev().find(|t| t.is_strong()) == Some(&BidiClass::AL)
            {
                types[i] = BidiClass::AN;
            }
        }

        // W3: AL becomes R
        for class in types.iter_mut() {
            if *class == BidiClass::AL {
                *class = BidiClass::R;
            }
        }

        // W4: Single separator between numbers. ES never joins AN.
        for i in 1..len.saturating_sub(1) {
            let curr = types[i];
            if curr != BidiClass::ES && curr != BidiClass::CS {
                continue;
            }
            let prev = types[i - 1];
            let next = types[i + 1];
            if prev == BidiClass::EN && next == BidiClass::EN {
                types[i] = BidiClass::EN;
            } else if curr == BidiClass::CS && prev == BidiClass::AN && next == BidiClass::AN {
                types[i] = BidiClass::AN;
            }
        }

        // W5: ET sequence adjacent to EN becomes EN
        let mut i = 0;
        while i < len {
            if types[i] != BidiClass::ET {
                i += 1;
                continue;
            }
            let start = i;
            let end = run_limit(types, start, |t| t == BidiClass::ET);

            let before = if start == 0 { self.sor } else { types[start - 1] };
            let after = if end == len { self.eor } else { types[end] };
            if before == BidiClass::EN || after == BidiClass::EN {
                types[start..end].fill(BidiClass::EN);
            }
            i = end;
        }

        // W6: Remaining separators and terminators become ON
        for class in types.iter_mut() {
            if matches!(*class, BidiClass::ES | BidiClass::ET | BidiClass::CS) {
                *class = BidiClass::ON;
            }
        }

        // W7: EN after L (or sor L) becomes L
        for i in 0..len {
            if types[i] != BidiClass::EN {
                continue;
            }
            let last_strong = types[..i]
                .iter()
                .rev()
                .copied()
                .find(|&t| t == BidiClass::L || t == BidiClass::R)
                .unwrap_or(self.sor);
            if last_strong == BidiClass::L {
                types[i] = BidiClass::L;
            }
        }
    }

    /// N1-N2: Resolve neutral sequences
    fn resolve_neutral(&mut self) {
        let types = &mut *self.types;
        let len = types.len();
        let embedding_direction = self.level.strong_type();

        let mut i = 0;
        while i < len {
            if !types[i].is_neutral() {
                i += 1;
                continue;
            }
            let start = i;
            let end = run_limit(types, start, BidiClass::is_neutral);

            let leading = if start == 0 { self.sor } else { strong_for_neutral(types[start - 1]) };
            let trailing = if end == len { self.eor } else { strong_for_neutral(types[end]) };

            let resolved = if leading == trailing {
                // N1: Same strong type on both sides
                leading
            } else {
                // N2: Different types - use embedding direction
                embedding_direction
            };
            types[start..end].fill(resolved);
            i = end;
        }
    }

    /// I1-I2: Resolve implicit levels
    fn resolve_implicit(&mut self) {
        let rtl = self.level.is_rtl();

        for (level, &class) in self.levels.iter_mut().zip(self.types.iter()) {
            let raise = match (rtl, class) {
                (false, BidiClass::L) | (true, BidiClass::R) => 0,
                (false, BidiClass::R) | (true, _) => 1,
                (false, _) => 2,
            };
            *level = level.raised(raise);
        }
    }
}

/// Numbers count as R when bounding a neutral sequence
fn strong_for_neutral(class: BidiClass) -> BidiClass {
    match class {
        BidiClass::AN | BidiClass::EN => BidiClass::R,
        other => other,
    }
}

/// First index at or after `from` whose type is outside the set
fn run_limit(types: &[BidiClass], from: usize, in_set: impl Fn(BidiClass) -> bool) -> usize {
    types[from..]
        .iter()
        .position(|&t| !in_set(t))
        .map_or(types.len(), |offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use BidiClass::*;

    /// Resolve a single run at `level` with the given boundaries
    fn resolve(types: &[BidiClass], level: u8, sor: BidiClass, eor: BidiClass) -> (Vec<BidiClass>, Vec<u8>) {
        let mut types = types.to_vec();
        let mut levels = vec![Level(level); types.len()];
        let run = LevelRun { start: 0, end: types.len(), level: Level(level), sor, eor };
        RunResolver::new(&run, &mut types, &mut levels).resolve();
        (types, levels.iter().map(|l| l.number()).collect())
    }

    #[test]
    fn test_level_runs_boundaries() {
        let levels = [Level(0), Level(0), Level(1), Level(2), Level(2)];
        let runs = level_runs(&levels, Level(0));
        assert_eq!(runs.len(), 3);
        assert_eq!((runs[0].start, runs[0].end), (0, 2));
        assert_eq!((runs[0].sor, runs[0].eor), (L, R));
        assert_eq!((runs[1].sor, runs[1].eor), (R, L));
        assert_eq!((runs[2].sor, runs[2].eor), (L, L));
    }

    #[test]
    fn test_w1_nsm_takes_previous() {
        let (types, _) = resolve(&[R, NSM, NSM], 1, R, R);
        assert_eq!(types, vec![R, R, R]);
        let (types, _) = resolve(&[NSM, L], 0, L, L);
        assert_eq!(types, vec![L, L]);
    }

    #[test]
    fn test_w2_european_number_after_arabic_letter() {
        // AL EN -> R AN, levels 1 and 2 at an odd run
        let (types, levels) = resolve(&[AL, EN], 1, R, R);
        assert_eq!(types, vec![R, AN]);
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn test_w4_separator_asymmetry() {
        let (types, _) = resolve(&[EN, ES, EN], 0, L, L);
        assert_eq!(types, vec![L, L, L]);
        let (types, _) = resolve(&[AN, CS, AN], 1, R, R);
        assert_eq!(types, vec![AN, AN, AN]);
        // ES between Arabic numbers stays a separator and becomes neutral
        let (types, _) = resolve(&[AN, ES, AN], 1, R, R);
        assert_eq!(types, vec![AN, R, AN]);
    }

    #[test]
    fn test_w5_terminators_before_number() {
        let (types, levels) = resolve(&[R, ET, ET, EN], 1, R, R);
        assert_eq!(types, vec![R, EN, EN, EN]);
        assert_eq!(levels, vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_w6_lone_terminator_is_neutral() {
        let (types, _) = resolve(&[R, ET, R], 1, R, R);
        assert_eq!(types, vec![R, R, R]);
    }

    #[test]
    fn test_w7_number_after_left() {
        let (types, levels) = resolve(&[L, WS, EN], 0, L, L);
        assert_eq!(types, vec![L, L, L]);
        assert_eq!(levels, vec![0, 0, 0]);
    }

    #[test]
    fn test_n1_between_same_direction() {
        let (types, levels) = resolve(&[R, WS, ON, R], 0, L, L);
        assert_eq!(types, vec![R, R, R, R]);
        assert_eq!(levels, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_n2_between_opposite_directions() {
        let (types, _) = resolve(&[L, WS, R], 0, L, L);
        assert_eq!(types, vec![L, L, R]);
        let (types, _) = resolve(&[L, WS, R], 1, R, R);
        assert_eq!(types, vec![L, R, R]);
    }

    #[test]
    fn test_neutral_uses_boundaries() {
        let (types, _) = resolve(&[WS, R], 0, R, L);
        assert_eq!(types, vec![R, R]);
        let (types, _) = resolve(&[R, WS], 0, L, L);
        assert_eq!(types, vec![R, L]);
    }

    #[test]
    fn test_implicit_levels() {
        let (_, levels) = resolve(&[L, R, AN], 0, L, L);
        assert_eq!(levels, vec![0, 1, 2]);
        let (_, levels) = resolve(&[R, L, AN], 1, R, R);
        assert_eq!(levels, vec![1, 2, 2]);
    }
}
