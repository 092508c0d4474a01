//! Embedding levels

use serde::{Deserialize, Serialize};

use super::BidiClass;

/// Embedding level (0-61, even=LTR, odd=RTL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Level(pub u8);

impl Level {
    /// Maximum explicit embedding level
    pub const MAX: u8 = 61;

    /// LTR level 0
    pub const LTR: Level = Level(0);

    /// RTL level 1
    pub const RTL: Level = Level(1);

    /// Create new level
    pub fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Level(level))
        } else {
            None
        }
    }

    /// Raw level value
    pub fn number(self) -> u8 {
        self.0
    }

    /// Check if LTR
    pub fn is_ltr(self) -> bool {
        self.0 % 2 == 0
    }

    /// Check if RTL
    pub fn is_rtl(self) -> bool {
        self.0 % 2 == 1
    }

    /// Get next higher LTR level (least greater even)
    pub fn next_ltr(self) -> Option<Self> {
        Self::new((self.0 + 2) & !1)
    }

    /// Get next higher RTL level (least greater odd)
    pub fn next_rtl(self) -> Option<Self> {
        Self::new((self.0 + 1) | 1)
    }

    /// Strong type matching this level's direction
    pub fn strong_type(self) -> BidiClass {
        BidiClass::for_level(self.0)
    }

    /// Level raised by `by` during implicit resolution
    ///
    /// Implicit levels may exceed [`Level::MAX`] by up to two.
    pub(crate) fn raised(self, by: u8) -> Self {
        Level(self.0 + by)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}
