use image::{GrayImage, Luma};

use crate::common::{
    bit_utils::BitStream,
    codec::Mode,
    error::{QRError, QRResult},
    iter::ZigzagIter,
    metadata::{finder_positions, Color, ECLevel, Version},
};

/// One cell of the symbol, tagged with the phase that placed it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Module {
    pub fn color(self) -> Option<Color> {
        match self {
            Module::Empty => None,
            Module::Func(c) | Module::Version(c) | Module::Format(c) | Module::Data(c) => Some(c),
        }
    }
}

/// A finished symbol. Only [`QRBuilder::build`](crate::QRBuilder::build) and
/// [`encode`](crate::encode) produce one, so every module is placed before rendering.
///
/// A grid cannot be assembled piecemeal from outside the crate:
///
/// ```compile_fail
/// use qrweave::{ECLevel, Mode, Version, QR};
///
/// let mut qr = QR::new(Version::new(0).unwrap(), ECLevel::L, Mode::Numeric);
/// qr.draw_all_function_patterns();
/// let _ = qr.to_bits();
/// ```
///
/// Nor can a finished grid have modules cleared:
///
/// ```compile_fail
/// use qrweave::{encode, ECLevel, Module};
///
/// let mut qr = encode("8675309", ECLevel::L).unwrap();
/// qr.set(0, 0, Module::Empty);
/// ```
#[derive(Debug, Clone)]
pub struct QR {
    grid: Box<[Module; MAX_QR_SIZE]>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mode: Mode,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel, mode: Mode) -> Self {
        let w = ver.width();
        Self { grid: Box::new([Module::Empty; MAX_QR_SIZE]), w, ver, ecl, mode }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid[..self.w * self.w]
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?}, Mode: {:?}, Width: {} }}",
            self.ver, self.ecl, self.mode, self.w
        )
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid().iter().filter(|m| m.color() == Some(Color::Dark)).count()
    }

    pub fn count_empty_modules(&self) -> usize {
        self.grid().iter().filter(|m| matches!(m, Module::Empty)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    // Negative coordinates count from the bottom or right edge
    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "Row out of bounds: {r}");
        debug_assert!(-w <= c && c < w, "Column out of bounds: {c}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    // Full row and column 6; finders drawn afterwards overwrite the ends
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        self.draw_line(6, 0, 6, w - 1);
        self.draw_line(0, 6, w - 1, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        // Centres in signed coordinates so the separator side follows the sign
        let centre = |a: usize| if a == 0 { 3 } else { -4 };
        for (r, c) in finder_positions(self.w) {
            self.draw_finder_pattern_at(centre(r), centre(c));
        }
    }

    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        for (r, c) in self.ver.alignment_positions() {
            if self.overlaps_finder(r, c) {
                continue;
            }
            self.draw_alignment_pattern_at(r as i16, c as i16);
        }
    }

    // Candidates within 11 modules of the top-left, top-right or bottom-left corner
    fn overlaps_finder(&self, r: usize, c: usize) -> bool {
        let far = self.w - 11;
        (r < 11 && c < 11) || (r < 11 && c > far) || (r > far && c < 11)
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}


// Format & version area
//------------------------------------------------------------------------------

impl QR {
    // Contents are left Light; only the area is claimed
    fn reserve_format_area(&mut self) {
        let m = Module::Format(Color::Light);
        for i in (0..=8).filter(|&i| i != 6) {
            self.set(8, i, m);
            self.set(i, 8, m);
        }
        for i in 1..=8 {
            self.set(8, -i, m);
        }
        for i in 1..=7 {
            self.set(-i, 8, m);
        }
    }

    fn reserve_version_area(&mut self) {
        if !self.ver.has_version_info() {
            return;
        }
        let m = Module::Version(Color::Light);
        for i in 0..6 {
            for j in -11..=-9 {
                self.set(i, j, m);
                self.set(j, i, m);
            }
        }
    }

    fn draw_dark_module(&mut self) {
        self.set(-8, 8, Module::Func(Color::Dark));
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_timing_pattern();
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.reserve_format_area();
        self.reserve_version_area();
        self.draw_dark_module();
    }
}

#[cfg(test)]
mod all_function_patterns_tests {
    use super::QR;
    use crate::common::codec::Mode;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_all_function_patterns_1() {
        let mut qr = QR::new(Version::from_index(0), ECLevel::L, Mode::Numeric);
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFM....Ffffffff\n\
             fFFFFFfFM....FfFFFFFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFFFFFfFM....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFM....FFFFFFFF\n\
             MMMMMMfMM....MMMMMMMM\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFFf............\n\
             fffffffFM............\n\
             fFFFFFfFM............\n\
             fFfffFfFM............\n\
             fFfffFfFM............\n\
             fFfffFfFM............\n\
             fFFFFFfFM............\n\
             fffffffFM............\n"
        );
    }

    #[test]
    fn test_all_function_patterns_7() {
        let mut qr = QR::new(Version::from_index(6), ECLevel::L, Mode::Numeric);
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFM.........................VVVFfffffff\n\
             fFFFFFfFM.........................VVVFfFFFFFf\n\
             fFfffFfFM.........................VVVFfFfffFf\n\
             fFfffFfFM.........................VVVFfFfffFf\n\
             fFfffFfFM...........fffff.........VVVFfFfffFf\n\
             fFFFFFfFM...........fFFFf.........VVVFfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFFM...........fFFFf............FFFFFFFF\n\
             MMMMMMfMM...........fffff............MMMMMMMM\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ....fffff...........fffff...........fffff....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fFfFf...........fFfFf...........fFfFf....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fffff...........fffff...........fffff....\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             ......f......................................\n\
             ......F......................................\n\
             VVVVVVf......................................\n\
             VVVVVVF......................................\n\
             VVVVVVf.............fffff...........fffff....\n\
             FFFFFFFFf...........fFFFf...........fFFFf....\n\
             fffffffFM...........fFfFf...........fFfFf....\n\
             fFFFFFfFM...........fFFFf...........fFFFf....\n\
             fFfffFfFM...........fffff...........fffff....\n\
             fFfffFfFM....................................\n\
             fFfffFfFM....................................\n\
             fFFFFFfFM....................................\n\
             fffffffFM....................................\n"
        );
    }

    #[test]
    fn test_free_modules_match_payload() {
        for v in Version::all() {
            let mut qr = QR::new(v, ECLevel::L, Mode::Numeric);
            qr.draw_all_function_patterns();
            assert_eq!(
                qr.count_empty_modules(),
                v.total_codewords() * 8 + v.remainder_bits(),
                "Version {v}"
            );
        }
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places `payload` along the zigzag path, skipping claimed modules. The payload
    /// must already carry the remainder bits.
    pub(crate) fn draw_encoding_region(&mut self, mut payload: BitStream) -> QRResult<()> {
        let mut coords = ZigzagIter::new(self.ver);
        while let Some(bit) = payload.take_bit() {
            let module = Module::Data(Color::from(bit));
            let slot = coords.by_ref().find(|&(r, c)| matches!(self.get(r, c), Module::Empty));
            match slot {
                Some((r, c)) => self.set(r, c, module),
                None => return Err(QRError::DataOverflow { remaining: payload.untaken() + 1 }),
            }
        }

        match self.count_empty_modules() {
            0 => Ok(()),
            n => Err(QRError::UnfilledModules(n)),
        }
    }
}

#[cfg(test)]
mod encoding_region_tests {
    use super::QR;
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::Mode;
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    fn payload(bits: usize) -> BitStream {
        let mut bs = BitStream::new(bits);
        for i in 0..bits {
            bs.push(i % 3 == 0);
        }
        bs
    }

    #[test]
    fn test_exact_fill() {
        let ver = Version::from_index(1);
        let mut qr = QR::new(ver, ECLevel::M, Mode::Numeric);
        qr.draw_all_function_patterns();
        let bits = ver.total_codewords() * 8 + ver.remainder_bits();
        assert_eq!(qr.draw_encoding_region(payload(bits)), Ok(()));
        assert_eq!(qr.count_empty_modules(), 0);
    }

    #[test]
    fn test_data_overflow() {
        let ver = Version::from_index(0);
        let mut qr = QR::new(ver, ECLevel::L, Mode::Numeric);
        qr.draw_all_function_patterns();
        let res = qr.draw_encoding_region(payload(208 + 5));
        assert_eq!(res, Err(QRError::DataOverflow { remaining: 5 }));
    }

    #[test]
    fn test_unfilled_modules() {
        let ver = Version::from_index(0);
        let mut qr = QR::new(ver, ECLevel::L, Mode::Numeric);
        qr.draw_all_function_patterns();
        let res = qr.draw_encoding_region(payload(200));
        assert_eq!(res, Err(QRError::UnfilledModules(8)));
    }

    #[test]
    fn test_first_bits_bottom_right() {
        let ver = Version::from_index(0);
        let mut qr = QR::new(ver, ECLevel::L, Mode::Numeric);
        qr.draw_all_function_patterns();
        let mut bs = BitStream::new(208);
        bs.extend(&[0b10110000]);
        bs.extend(&[0; 25]);
        qr.draw_encoding_region(bs).unwrap();
        let debug = qr.to_debug_str();
        let rows: Vec<&str> = debug.lines().collect();
        assert!(rows[21].ends_with("Dd"));
        assert!(rows[20].ends_with("dd"));
        assert!(rows[19].ends_with("DD"));
    }
}

// Render
//------------------------------------------------------------------------------

// Quiet zone width in modules
const QUIET_ZONE: usize = 4;

impl QR {
    /// Rows top to bottom, 1 for Dark and 0 for Light.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.grid()
            .chunks(self.w)
            .map(|row| row.iter().map(|m| Self::color_of(*m).select(1, 0)).collect())
            .collect()
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = QUIET_ZONE * module_sz;
        let qr_sz = self.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz * 2 * 3 + 1));
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push_str("  ");
                    continue;
                }
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                canvas.push_str(Self::color_of(self.get(r, c)).select("██", "  "));
            }
            canvas.push('\n');
        }

        canvas
    }

    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = QUIET_ZONE as u32 * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for i in qz_sz..qz_sz + qr_sz {
            for j in qz_sz..qz_sz + qr_sz {
                let r = ((i - qz_sz) / module_sz) as i16;
                let c = ((j - qz_sz) / module_sz) as i16;
                let pixel = Self::color_of(self.get(r, c)).select(Luma([0]), Luma([255]));
                canvas.put_pixel(j, i, pixel);
            }
        }

        canvas
    }

    fn color_of(module: Module) -> Color {
        debug_assert!(module != Module::Empty, "Empty module in a finished symbol");
        module.color().unwrap_or(Color::Light)
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const MAX_QR_SIZE: usize = 177 * 177;
