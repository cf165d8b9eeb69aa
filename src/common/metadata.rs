use std::fmt::{Display, Formatter};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::version_db::VERSION_DB;

// Version
//------------------------------------------------------------------------------

/// Zero-based index into the version table. Index 0 is the 21x21 symbol, printed
/// as version 1.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Version(usize);

impl Version {
    pub const COUNT: usize = 40;

    pub fn new(index: usize) -> QRResult<Self> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(QRError::InvalidVersion(index))
        }
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Version index out of range");
        Self(index)
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (0..Self::COUNT).map(Self)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// Symbol version as printed on the symbol, 1..=40.
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    pub const fn width(self) -> usize {
        21 + 4 * self.0
    }

    fn record(self) -> &'static VersionRecord {
        &VERSION_DB[self.0]
    }

    /// Maximum character count for `mode` at `ecl`. Input fits only when its length is
    /// strictly smaller than this value.
    pub fn capacity(self, mode: Mode, ecl: ECLevel) -> usize {
        self.record().capacity[ecl as usize][mode.index()]
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let tier = match self.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        CHAR_CNT_BITS[tier][mode.index()]
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn block_structure(self, ecl: ECLevel) -> BlockStructure {
        self.record().blocks[ecl as usize]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        self.block_structure(ecl).data_codewords()
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        self.block_structure(ecl).ecc_per_block
    }

    pub fn ecc_codewords(self, ecl: ECLevel) -> usize {
        self.block_structure(ecl).ecc_codewords()
    }

    pub fn total_codewords(self) -> usize {
        self.block_structure(ECLevel::L).total_codewords()
    }

    pub fn remainder_bits(self) -> usize {
        self.record().remainder_bits
    }

    /// Alignment centre coordinates along one axis. The full set of candidate centres is
    /// the cartesian product of this list with itself.
    pub fn alignment_pattern(self) -> &'static [usize] {
        self.record().alignment
    }

    pub fn alignment_positions(self) -> Vec<(usize, usize)> {
        let poses = self.alignment_pattern();
        poses.iter().flat_map(|&r| poses.iter().map(move |&c| (r, c))).collect()
    }

    /// Version information blocks are present from symbol version 7 onwards.
    pub fn has_version_info(self) -> bool {
        self.number() >= 7
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Top-left anchors of the three finder patterns for a symbol of side `width`.
pub fn finder_positions(width: usize) -> [(usize, usize); 3] {
    [(0, 0), (0, width - 7), (width - 7, 0)]
}

static CHAR_CNT_BITS: [[usize; 4]; 3] = [[10, 9, 8, 8], [12, 11, 16, 10], [14, 13, 16, 12]];


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

// Block structure
//------------------------------------------------------------------------------

/// Reed-Solomon block layout of one (version, level) pair.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BlockStructure {
    /// Block count and data codewords per block of group 1
    pub group1: (usize, usize),
    /// Block count and data codewords per block of group 2, when present
    pub group2: Option<(usize, usize)>,
    pub ecc_per_block: usize,
}

impl BlockStructure {
    pub(crate) const fn new(
        count1: usize,
        size1: usize,
        count2: usize,
        size2: usize,
        ecc_per_block: usize,
    ) -> Self {
        let group2 = if count2 > 0 { Some((count2, size2)) } else { None };
        Self { group1: (count1, size1), group2, ecc_per_block }
    }

    pub fn block_count(&self) -> usize {
        self.group1.0 + self.group2.map_or(0, |(c, _)| c)
    }

    pub fn data_codewords(&self) -> usize {
        self.group1.0 * self.group1.1 + self.group2.map_or(0, |(c, s)| c * s)
    }

    pub fn ecc_codewords(&self) -> usize {
        self.block_count() * self.ecc_per_block
    }

    pub fn total_codewords(&self) -> usize {
        self.data_codewords() + self.ecc_codewords()
    }
}

// Version record
//------------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct VersionRecord {
    pub alignment: &'static [usize],
    pub remainder_bits: usize,
    // [ECLevel][Mode]
    pub capacity: [[usize; 4]; 4],
    pub blocks: [BlockStructure; 4],
}

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}
