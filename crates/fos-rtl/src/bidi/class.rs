//! Bidirectional character types
//!
//! Classification of UTF-16 code units into the 19 bidi classes used by
//! the resolver. The lookup table covers the whole BMP.

use serde::{Deserialize, Serialize};

use crate::{Result, TextError};

/// Bidirectional character type
///
/// Discriminants follow the numeric encoding used by raw type arrays,
/// see [`BidiClass::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BidiClass {
    /// Left-to-Right
    L = 0,
    /// Left-to-Right Embedding
    LRE = 1,
    /// Left-to-Right Override
    LRO = 2,
    /// Right-to-Left
    R = 3,
    /// Arabic Letter
    AL = 4,
    /// Right-to-Left Embedding
    RLE = 5,
    /// Right-to-Left Override
    RLO = 6,
    /// Pop Directional Format
    PDF = 7,
    /// European Number
    EN = 8,
    /// European Number Separator
    ES = 9,
    /// European Number Terminator
    ET = 10,
    /// Arabic Number
    AN = 11,
    /// Common Number Separator
    CS = 12,
    /// Nonspacing Mark
    NSM = 13,
    /// Boundary Neutral
    BN = 14,
    /// Paragraph Separator
    B = 15,
    /// Segment Separator
    S = 16,
    /// Whitespace
    WS = 17,
    /// Other Neutrals
    ON = 18,
}

impl BidiClass {
    /// Every class, indexed by its discriminant
    pub const ALL: [BidiClass; 19] = [
        BidiClass::L, BidiClass::LRE, BidiClass::LRO, BidiClass::R, BidiClass::AL,
        BidiClass::RLE, BidiClass::RLO, BidiClass::PDF, BidiClass::EN, BidiClass::ES,
        BidiClass::ET, BidiClass::AN, BidiClass::CS, BidiClass::NSM, BidiClass::BN,
        BidiClass::B, BidiClass::S, BidiClass::WS, BidiClass::ON,
    ];

    /// Get bidi class for a UTF-16 code unit
    pub fn of(unit: u16) -> Self {
        let idx = BIDI_RANGES.partition_point(|&(_, end, _)| end < unit);
        match BIDI_RANGES.get(idx) {
            Some(&(start, _, class)) if start <= unit => class,
            _ => BidiClass::L,
        }
    }

    /// Get bidi class for a char; code points outside the BMP are L
    pub fn of_char(c: char) -> Self {
        u16::try_from(c as u32).map_or(BidiClass::L, Self::of)
    }

    /// Check if this is a strong type
    pub fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    /// Check if this is an embedding or override initiator
    pub fn is_embedding(self) -> bool {
        matches!(self, BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO)
    }

    /// Characters removed by rule X9 and reinserted afterwards
    pub fn is_removed_by_x9(self) -> bool {
        self.is_embedding() || matches!(self, BidiClass::PDF | BidiClass::BN)
    }

    /// Whitespace for rule L1, including the codes removed by X9
    pub fn is_whitespace(self) -> bool {
        self.is_removed_by_x9() || self == BidiClass::WS
    }

    /// Neutrals resolved by rules N1/N2
    pub fn is_neutral(self) -> bool {
        matches!(self, BidiClass::B | BidiClass::S | BidiClass::WS | BidiClass::ON)
    }

    /// Strong type matching the direction of an embedding level
    pub fn for_level(level: u8) -> Self {
        if level & 1 == 0 { BidiClass::L } else { BidiClass::R }
    }
}

impl TryFrom<u8> for BidiClass {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

/// Convert a raw type array, rejecting values outside the 19 classes
pub fn classes_from_raw(types: &[u8]) -> Result<Vec<BidiClass>> {
    types
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            BidiClass::try_from(value).map_err(|value| TextError::InvalidBidiClass { index, value })
        })
        .collect()
}

/// Classify a run of UTF-16 code units
pub fn classify(text: &[u16]) -> Vec<BidiClass> {
    text.iter().map(|&unit| BidiClass::of(unit)).collect()
}

use BidiClass::*;

/// Sorted, contiguous (start, end, class) ranges covering U+0000..=U+FFFF
static BIDI_RANGES: &[(u16, u16, BidiClass)] = &[
    (0x0000, 0x0008, BN), (0x0009, 0x0009, S), (0x000A, 0x000A, B), (0x000B, 0x000B, S),
    (0x000C, 0x000C, WS), (0x000D, 0x000D, B), (0x000E, 0x001B, BN), (0x001C, 0x001E, B),
    (0x001F, 0x001F, S), (0x0020, 0x0020, WS), (0x0021, 0x0022, ON), (0x0023, 0x0025, ET),
    (0x0026, 0x002A, ON), (0x002B, 0x002B, ET), (0x002C, 0x002C, CS), (0x002D, 0x002D, ET),
    (0x002E, 0x002E, CS), (0x002F, 0x002F, ES), (0x0030, 0x0039, EN), (0x003A, 0x003A, CS),
    (0x003B, 0x0040, ON), (0x0041, 0x005A, L), (0x005B, 0x0060, ON), (0x0061, 0x007A, L),
    (0x007B, 0x007E, ON), (0x007F, 0x0084, BN), (0x0085, 0x0085, B), (0x0086, 0x009F, BN),
    (0x00A0, 0x00A0, CS), (0x00A1, 0x00A1, ON), (0x00A2, 0x00A5, ET), (0x00A6, 0x00A9, ON),
    (0x00AA, 0x00AA, L), (0x00AB, 0x00AF, ON), (0x00B0, 0x00B1, ET), (0x00B2, 0x00B3, EN),
    (0x00B4, 0x00B4, ON), (0x00B5, 0x00B5, L), (0x00B6, 0x00B8, ON), (0x00B9, 0x00B9, EN),
    (0x00BA, 0x00BA, L), (0x00BB, 0x00BF, ON), (0x00C0, 0x00D6, L), (0x00D7, 0x00D7, ON),
    (0x00D8, 0x00F6, L), (0x00F7, 0x00F7, ON), (0x00F8, 0x02B8, L), (0x02B9, 0x02BA, ON),
    (0x02BB, 0x02C1, L), (0x02C2, 0x02CF, ON), (0x02D0, 0x02D1, L), (0x02D2, 0x02DF, ON),
    (0x02E0, 0x02E4, L), (0x02E5, 0x02ED, ON), (0x02EE, 0x02EE, L), (0x02EF, 0x02FF, ON),
    (0x0300, 0x0357, NSM), (0x0358, 0x035C, L), (0x035D, 0x036F, NSM), (0x0370, 0x0373, L),
    (0x0374, 0x0375, ON), (0x0376, 0x037D, L), (0x037E, 0x037E, ON), (0x037F, 0x0383, L),
    (0x0384, 0x0385, ON), (0x0386, 0x0386, L), (0x0387, 0x0387, ON), (0x0388, 0x03F5, L),
    (0x03F6, 0x03F6, ON), (0x03F7, 0x0482, L), (0x0483, 0x0486, NSM), (0x0487, 0x0487, L),
    (0x0488, 0x0489, NSM), (0x048A, 0x0589, L), (0x058A, 0x058A, ON), (0x058B, 0x0590, L),
    (0x0591, 0x05A1, NSM), (0x05A2, 0x05A2, L), (0x05A3, 0x05B9, NSM), (0x05BA, 0x05BA, L),
    (0x05BB, 0x05BD, NSM), (0x05BE, 0x05BE, R), (0x05BF, 0x05BF, NSM), (0x05C0, 0x05C0, R),
    (0x05C1, 0x05C2, NSM), (0x05C3, 0x05C3, R), (0x05C4, 0x05C4, NSM), (0x05C5, 0x05CF, L),
    (0x05D0, 0x05EA, R), (0x05EB, 0x05EF, L), (0x05F0, 0x05F4, R), (0x05F5, 0x05FF, L),
    (0x0600, 0x0603, AL), (0x0604, 0x060B, L), (0x060C, 0x060C, CS), (0x060D, 0x060D, AL),
    (0x060E, 0x060F, ON), (0x0610, 0x0615, NSM), (0x0616, 0x061A, L), (0x061B, 0x061B, AL),
    (0x061C, 0x061E, L), (0x061F, 0x061F, AL), (0x0620, 0x0620, L), (0x0621, 0x063A, AL),
    (0x063B, 0x063F, L), (0x0640, 0x064A, AL), (0x064B, 0x0658, NSM), (0x0659, 0x065F, L),
    (0x0660, 0x0669, AN), (0x066A, 0x066A, ET), (0x066B, 0x066C, AN), (0x066D, 0x066F, AL),
    (0x0670, 0x0670, NSM), (0x0671, 0x06D5, AL), (0x06D6, 0x06DC, NSM), (0x06DD, 0x06DD, AL),
    (0x06DE, 0x06E4, NSM), (0x06E5, 0x06E6, AL), (0x06E7, 0x06E8, NSM), (0x06E9, 0x06E9, ON),
    (0x06EA, 0x06ED, NSM), (0x06EE, 0x06EF, AL), (0x06F0, 0x06F9, EN), (0x06FA, 0x070D, AL),
    (0x070E, 0x070E, L), (0x070F, 0x070F, BN), (0x0710, 0x0710, AL), (0x0711, 0x0711, NSM),
    (0x0712, 0x072F, AL), (0x0730, 0x074A, NSM), (0x074B, 0x074C, L), (0x074D, 0x074F, AL),
    (0x0750, 0x077F, L), (0x0780, 0x07A5, AL), (0x07A6, 0x07B0, NSM), (0x07B1, 0x07B1, AL),
    (0x07B2, 0x0900, L), (0x0901, 0x0902, NSM), (0x0903, 0x093B, L), (0x093C, 0x093C, NSM),
    (0x093D, 0x0940, L), (0x0941, 0x0948, NSM), (0x0949, 0x094C, L), (0x094D, 0x094D, NSM),
    (0x094E, 0x0950, L), (0x0951, 0x0954, NSM), (0x0955, 0x0961, L), (0x0962, 0x0963, NSM),
    (0x0964, 0x0980, L), (0x0981, 0x0981, NSM), (0x0982, 0x09BB, L), (0x09BC, 0x09BC, NSM),
    (0x09BD, 0x09C0, L), (0x09C1, 0x09C4, NSM), (0x09C5, 0x09CC, L), (0x09CD, 0x09CD, NSM),
    (0x09CE, 0x09E1, L), (0x09E2, 0x09E3, NSM), (0x09E4, 0x09F1, L), (0x09F2, 0x09F3, ET),
    (0x09F4, 0x0A00, L), (0x0A01, 0x0A02, NSM), (0x0A03, 0x0A3B, L), (0x0A3C, 0x0A3C, NSM),
    (0x0A3D, 0x0A40, L), (0x0A41, 0x0A42, NSM), (0x0A43, 0x0A46, L), (0x0A47, 0x0A48, NSM),
    (0x0A49, 0x0A4A, L), (0x0A4B, 0x0A4D, NSM), (0x0A4E, 0x0A6F, L), (0x0A70, 0x0A71, NSM),
    (0x0A72, 0x0A80, L), (0x0A81, 0x0A82, NSM), (0x0A83, 0x0ABB, L), (0x0ABC, 0x0ABC, NSM),
    (0x0ABD, 0x0AC0, L), (0x0AC1, 0x0AC5, NSM), (0x0AC6, 0x0AC6, L), (0x0AC7, 0x0AC8, NSM),
    (0x0AC9, 0x0ACC, L), (0x0ACD, 0x0ACD, NSM), (0x0ACE, 0x0AE1, L), (0x0AE2, 0x0AE3, NSM),
    (0x0AE4, 0x0AF0, L), (0x0AF1, 0x0AF1, ET), (0x0AF2, 0x0B00, L), (0x0B01, 0x0B01, NSM),
    (0x0B02, 0x0B3B, L), (0x0B3C, 0x0B3C, NSM), (0x0B3D, 0x0B3E, L), (0x0B3F, 0x0B3F, NSM),
    (0x0B40, 0x0B40, L), (0x0B41, 0x0B43, NSM), (0x0B44, 0x0B4C, L), (0x0B4D, 0x0B4D, NSM),
    (0x0B4E, 0x0B55, L), (0x0B56, 0x0B56, NSM), (0x0B57, 0x0B81, L), (0x0B82, 0x0B82, NSM),
    (0x0B83, 0x0BBF, L), (0x0BC0, 0x0BC0, NSM), (0x0BC1, 0x0BCC, L), (0x0BCD, 0x0BCD, NSM),
    (0x0BCE, 0x0BF2, L), (0x0BF3, 0x0BF8, ON), (0x0BF9, 0x0BF9, ET), (0x0BFA, 0x0BFA, ON),
    (0x0BFB, 0x0C3D, L), (0x0C3E, 0x0C40, NSM), (0x0C41, 0x0C45, L), (0x0C46, 0x0C48, NSM),
    (0x0C49, 0x0C49, L), (0x0C4A, 0x0C4D, NSM), (0x0C4E, 0x0C54, L), (0x0C55, 0x0C56, NSM),
    (0x0C57, 0x0CBB, L), (0x0CBC, 0x0CBC, NSM), (0x0CBD, 0x0CCB, L), (0x0CCC, 0x0CCD, NSM),
    (0x0CCE, 0x0D40, L), (0x0D41, 0x0D43, NSM), (0x0D44, 0x0D4C, L), (0x0D4D, 0x0D4D, NSM),
    (0x0D4E, 0x0DC9, L), (0x0DCA, 0x0DCA, NSM), (0x0DCB, 0x0DD1, L), (0x0DD2, 0x0DD4, NSM),
    (0x0DD5, 0x0DD5, L), (0x0DD6, 0x0DD6, NSM), (0x0DD7, 0x0E30, L), (0x0E31, 0x0E31, NSM),
    (0x0E32, 0x0E33, L), (0x0E34, 0x0E3A, NSM), (0x0E3B, 0x0E3E, L), (0x0E3F, 0x0E3F, ET),
    (0x0E40, 0x0E46, L), (0x0E47, 0x0E4E, NSM), (0x0E4F, 0x0EB0, L), (0x0EB1, 0x0EB1, NSM),
    (0x0EB2, 0x0EB3, L), (0x0EB4, 0x0EB9, NSM), (0x0EBA, 0x0EBA, L), (0x0EBB, 0x0EBC, NSM),
    (0x0EBD, 0x0EC7, L), (0x0EC8, 0x0ECD, NSM), (0x0ECE, 0x0F17, L), (0x0F18, 0x0F19, NSM),
    (0x0F1A, 0x0F34, L), (0x0F35, 0x0F35, NSM), (0x0F36, 0x0F36, L), (0x0F37, 0x0F37, NSM),
    (0x0F38, 0x0F38, L), (0x0F39, 0x0F39, NSM), (0x0F3A, 0x0F3D, ON), (0x0F3E, 0x0F70, L),
    (0x0F71, 0x0F7E, NSM), (0x0F7F, 0x0F7F, L), (0x0F80, 0x0F84, NSM), (0x0F85, 0x0F85, L),
    (0x0F86, 0x0F87, NSM), (0x0F88, 0x0F8F, L), (0x0F90, 0x0F97, NSM), (0x0F98, 0x0F98, L),
    (0x0F99, 0x0FBC, NSM), (0x0FBD, 0x0FC5, L), (0x0FC6, 0x0FC6, NSM), (0x0FC7, 0x102C, L),
    (0x102D, 0x1030, NSM), (0x1031, 0x1031, L), (0x1032, 0x1032, NSM), (0x1033, 0x1035, L),
    (0x1036, 0x1037, NSM), (0x1038, 0x1038, L), (0x1039, 0x1039, NSM), (0x103A, 0x1057, L),
    (0x1058, 0x1059, NSM), (0x105A, 0x167F, L), (0x1680, 0x1680, WS), (0x1681, 0x169A, L),
    (0x169B, 0x169C, ON), (0x169D, 0x1711, L), (0x1712, 0x1714, NSM), (0x1715, 0x1731, L),
    (0x1732, 0x1734, NSM), (0x1735, 0x1751, L), (0x1752, 0x1753, NSM), (0x1754, 0x1771, L),
    (0x1772, 0x1773, NSM), (0x1774, 0x17B6, L), (0x17B7, 0x17BD, NSM), (0x17BE, 0x17C5, L),
    (0x17C6, 0x17C6, NSM), (0x17C7, 0x17C8, L), (0x17C9, 0x17D3, NSM), (0x17D4, 0x17DA, L),
    (0x17DB, 0x17DB, ET), (0x17DC, 0x17DC, L), (0x17DD, 0x17DD, NSM), (0x17DE, 0x17EF, L),
    (0x17F0, 0x17F9, ON), (0x17FA, 0x17FF, L), (0x1800, 0x180A, ON), (0x180B, 0x180D, NSM),
    (0x180E, 0x180E, WS), (0x180F, 0x18A8, L), (0x18A9, 0x18A9, NSM), (0x18AA, 0x191F, L),
    (0x1920, 0x1922, NSM), (0x1923, 0x1926, L), (0x1927, 0x192B, NSM), (0x192C, 0x1931, L),
    (0x1932, 0x1932, NSM), (0x1933, 0x1938, L), (0x1939, 0x193B, NSM), (0x193C, 0x193F, L),
    (0x1940, 0x1940, ON), (0x1941, 0x1943, L), (0x1944, 0x1945, ON), (0x1946, 0x19DF, L),
    (0x19E0, 0x19FF, ON), (0x1A00, 0x1FBC, L), (0x1FBD, 0x1FBD, ON), (0x1FBE, 0x1FBE, L),
    (0x1FBF, 0x1FC1, ON), (0x1FC2, 0x1FCC, L), (0x1FCD, 0x1FCF, ON), (0x1FD0, 0x1FDC, L),
    (0x1FDD, 0x1FDF, ON), (0x1FE0, 0x1FEC, L), (0x1FED, 0x1FEF, ON), (0x1FF0, 0x1FFC, L),
    (0x1FFD, 0x1FFE, ON), (0x1FFF, 0x1FFF, L), (0x2000, 0x200A, WS), (0x200B, 0x200D, BN),
    (0x200E, 0x200E, L), (0x200F, 0x200F, R), (0x2010, 0x2027, ON), (0x2028, 0x2028, WS),
    (0x2029, 0x2029, B), (0x202A, 0x202A, LRE), (0x202B, 0x202B, RLE), (0x202C, 0x202C, PDF),
    (0x202D, 0x202D, LRO), (0x202E, 0x202E, RLO), (0x202F, 0x202F, WS), (0x2030, 0x2034, ET),
    (0x2035, 0x2054, ON), (0x2055, 0x2056, L), (0x2057, 0x2057, ON), (0x2058, 0x205E, L),
    (0x205F, 0x205F, WS), (0x2060, 0x2063, BN), (0x2064, 0x2069, L), (0x206A, 0x206F, BN),
    (0x2070, 0x2070, EN), (0x2071, 0x2073, L), (0x2074, 0x2079, EN), (0x207A, 0x207B, ET),
    (0x207C, 0x207E, ON), (0x207F, 0x207F, L), (0x2080, 0x2089, EN), (0x208A, 0x208B, ET),
    (0x208C, 0x208E, ON), (0x208F, 0x209F, L), (0x20A0, 0x20B1, ET), (0x20B2, 0x20CF, L),
    (0x20D0, 0x20EA, NSM), (0x20EB, 0x20FF, L), (0x2100, 0x2101, ON), (0x2102, 0x2102, L),
    (0x2103, 0x2106, ON), (0x2107, 0x2107, L), (0x2108, 0x2109, ON), (0x210A, 0x2113, L),
    (0x2114, 0x2114, ON), (0x2115, 0x2115, L), (0x2116, 0x2118, ON), (0x2119, 0x211D, L),
    (0x211E, 0x2123, ON), (0x2124, 0x2124, L), (0x2125, 0x2125, ON), (0x2126, 0x2126, L),
    (0x2127, 0x2127, ON), (0x2128, 0x2128, L), (0x2129, 0x2129, ON), (0x212A, 0x212D, L),
    (0x212E, 0x212E, ET), (0x212F, 0x2131, L), (0x2132, 0x2132, ON), (0x2133, 0x2139, L),
    (0x213A, 0x213B, ON), (0x213C, 0x213F, L), (0x2140, 0x2144, ON), (0x2145, 0x2149, L),
    (0x214A, 0x214B, ON), (0x214C, 0x2152, L), (0x2153, 0x215F, ON), (0x2160, 0x218F, L),
    (0x2190, 0x2211, ON), (0x2212, 0x2213, ET), (0x2214, 0x2335, ON), (0x2336, 0x237A, L),
    (0x237B, 0x2394, ON), (0x2395, 0x2395, L), (0x2396, 0x23D0, ON), (0x23D1, 0x23FF, L),
    (0x2400, 0x2426, ON), (0x2427, 0x243F, L), (0x2440, 0x244A, ON), (0x244B, 0x245F, L),
    (0x2460, 0x249B, EN), (0x249C, 0x24E9, L), (0x24EA, 0x24EA, EN), (0x24EB, 0x2617, ON),
    (0x2618, 0x2618, L), (0x2619, 0x267D, ON), (0x267E, 0x267F, L), (0x2680, 0x2691, ON),
    (0x2692, 0x269F, L), (0x26A0, 0x26A1, ON), (0x26A2, 0x2700, L), (0x2701, 0x2704, ON),
    (0x2705, 0x2705, L), (0x2706, 0x2709, ON), (0x270A, 0x270B, L), (0x270C, 0x2727, ON),
    (0x2728, 0x2728, L), (0x2729, 0x274B, ON), (0x274C, 0x274C, L), (0x274D, 0x274D, ON),
    (0x274E, 0x274E, L), (0x274F, 0x2752, ON), (0x2753, 0x2755, L), (0x2756, 0x2756, ON),
    (0x2757, 0x2757, L), (0x2758, 0x275E, ON), (0x275F, 0x2760, L), (0x2761, 0x2794, ON),
    (0x2795, 0x2797, L), (0x2798, 0x27AF, ON), (0x27B0, 0x27B0, L), (0x27B1, 0x27BE, ON),
    (0x27BF, 0x27CF, L), (0x27D0, 0x27EB, ON), (0x27EC, 0x27EF, L), (0x27F0, 0x2B0D, ON),
    (0x2B0E, 0x2E7F, L), (0x2E80, 0x2E99, ON), (0x2E9A, 0x2E9A, L), (0x2E9B, 0x2EF3, ON),
    (0x2EF4, 0x2EFF, L), (0x2F00, 0x2FD5, ON), (0x2FD6, 0x2FEF, L), (0x2FF0, 0x2FFB, ON),
    (0x2FFC, 0x2FFF, L), (0x3000, 0x3000, WS), (0x3001, 0x3004, ON), (0x3005, 0x3007, L),
    (0x3008, 0x3020, ON), (0x3021, 0x3029, L), (0x302A, 0x302F, NSM), (0x3030, 0x3030, ON),
    (0x3031, 0x3035, L), (0x3036, 0x3037, ON), (0x3038, 0x303C, L), (0x303D, 0x303F, ON),
    (0x3040, 0x3098, L), (0x3099, 0x309A, NSM), (0x309B, 0x309C, ON), (0x309D, 0x309F, L),
    (0x30A0, 0x30A0, ON), (0x30A1, 0x30FA, L), (0x30FB, 0x30FB, ON), (0x30FC, 0x321C, L),
    (0x321D, 0x321E, ON), (0x321F, 0x324F, L), (0x3250, 0x325F, ON), (0x3260, 0x327B, L),
    (0x327C, 0x327D, ON), (0x327E, 0x32B0, L), (0x32B1, 0x32BF, ON), (0x32C0, 0x32CB, L),
    (0x32CC, 0x32CF, ON), (0x32D0, 0x3376, L), (0x3377, 0x337A, ON), (0x337B, 0x33DD, L),
    (0x33DE, 0x33DF, ON), (0x33E0, 0x33FE, L), (0x33FF, 0x33FF, ON), (0x3400, 0x4DBF, L),
    (0x4DC0, 0x4DFF, ON), (0x4E00, 0xA48F, L), (0xA490, 0xA4C6, ON), (0xA4C7, 0xFB1C, L),
    (0xFB1D, 0xFB1D, R), (0xFB1E, 0xFB1E, NSM), (0xFB1F, 0xFB28, R), (0xFB29, 0xFB29, ET),
    (0xFB2A, 0xFB36, R), (0xFB37, 0xFB37, L), (0xFB38, 0xFB3C, R), (0xFB3D, 0xFB3D, L),
    (0xFB3E, 0xFB3E, R), (0xFB3F, 0xFB3F, L), (0xFB40, 0xFB41, R), (0xFB42, 0xFB42, L),
    (0xFB43, 0xFB44, R), (0xFB45, 0xFB45, L), (0xFB46, 0xFB4F, R), (0xFB50, 0xFBB1, AL),
    (0xFBB2, 0xFBD2, L), (0xFBD3, 0xFD3D, AL), (0xFD3E, 0xFD3F, ON), (0xFD40, 0xFD4F, L),
    (0xFD50, 0xFD8F, AL), (0xFD90, 0xFD91, L), (0xFD92, 0xFDC7, AL), (0xFDC8, 0xFDEF, L),
    (0xFDF0, 0xFDFC, AL), (0xFDFD, 0xFDFD, ON), (0xFDFE, 0xFDFF, L), (0xFE00, 0xFE0F, NSM),
    (0xFE10, 0xFE1F, L), (0xFE20, 0xFE23, NSM), (0xFE24, 0xFE2F, L), (0xFE30, 0xFE4F, ON),
    (0xFE50, 0xFE50, CS), (0xFE51, 0xFE51, ON), (0xFE52, 0xFE52, CS), (0xFE53, 0xFE53, L),
    (0xFE54, 0xFE54, ON), (0xFE55, 0xFE55, CS), (0xFE56, 0xFE5E, ON), (0xFE5F, 0xFE5F, ET),
    (0xFE60, 0xFE61, ON), (0xFE62, 0xFE63, ET), (0xFE64, 0xFE66, ON), (0xFE67, 0xFE67, L),
    (0xFE68, 0xFE68, ON), (0xFE69, 0xFE6A, ET), (0xFE6B, 0xFE6B, ON), (0xFE6C, 0xFE6F, L),
    (0xFE70, 0xFE74, AL), (0xFE75, 0xFE75, L), (0xFE76, 0xFEFC, AL), (0xFEFD, 0xFEFE, L),
    (0xFEFF, 0xFEFF, BN), (0xFF00, 0xFF00, L), (0xFF01, 0xFF02, ON), (0xFF03, 0xFF05, ET),
    (0xFF06, 0xFF0A, ON), (0xFF0B, 0xFF0B, ET), (0xFF0C, 0xFF0C, CS), (0xFF0D, 0xFF0D, ET),
    (0xFF0E, 0xFF0E, CS), (0xFF0F, 0xFF0F, ES), (0xFF10, 0xFF19, EN), (0xFF1A, 0xFF1A, CS),
    (0xFF1B, 0xFF20, ON), (0xFF21, 0xFF3A, L), (0xFF3B, 0xFF40, ON), (0xFF41, 0xFF5A, L),
    (0xFF5B, 0xFF65, ON), (0xFF66, 0xFFDF, L), (0xFFE0, 0xFFE1, ET), (0xFFE2, 0xFFE4, ON),
    (0xFFE5, 0xFFE6, ET), (0xFFE7, 0xFFE7, L), (0xFFE8, 0xFFEE, ON), (0xFFEF, 0xFFF8, L),
    (0xFFF9, 0xFFFB, BN), (0xFFFC, 0xFFFD, ON), (0xFFFE, 0xFFFF, L),
];
