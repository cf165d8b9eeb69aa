use super::metadata::Version;

// Zigzag walk over the symbol
//------------------------------------------------------------------------------

/// Yields every coordinate of the symbol in placement order: two-column strips from
/// the right edge, alternating upward and downward, skipping the vertical timing
/// column. Callers filter out cells that are already taken by function patterns.
pub struct ZigzagIter {
    r: i16,
    c: i16,
    width: i16,
}

const VERT_TIMING_COL: i16 = 6;

impl ZigzagIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { r: w - 1, c: w - 1, width: w }
    }
}

impl Iterator for ZigzagIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c);

        // Strips left of the timing column are shifted by one
        let adjusted_col = if self.c <= VERT_TIMING_COL { self.c + 1 } else { self.c };
        match (self.width - adjusted_col) % 4 {
            2 if self.r > 0 => {
                self.r -= 1;
                self.c += 1;
            }
            0 if self.r < self.width - 1 => {
                self.r += 1;
                self.c += 1;
            }
            0 | 2 if self.c == VERT_TIMING_COL + 1 => {
                self.c -= 2;
            }
            _ => {
                self.c -= 1;
            }
        }
        Some(res)
    }
}
