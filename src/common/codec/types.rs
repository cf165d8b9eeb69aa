// Mode
//------------------------------------------------------------------------------

/// Encoding mode of a segment. Chunk packing stays internal to the encoder:
///
/// ```compile_fail
/// use qrweave::Mode;
///
/// let _ = Mode::Byte.encode_chunk(b"");
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

pub static ALPHANUMERIC_CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

impl Mode {
    /// Column of this mode in the capacity and character count tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
            Self::Kanji => 3,
        }
    }

    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Narrowest of Numeric, Alphanumeric and Byte that holds every byte of `data`.
    pub fn classify(data: &[u8]) -> Self {
        if data.iter().all(|&b| Self::Numeric.contains(b)) {
            Self::Numeric
        } else if data.iter().all(|&b| Self::Alphanumeric.contains(b)) {
            Self::Alphanumeric
        } else {
            Self::Byte
        }
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    /// Packs one chunk into its numeric value: up to 3 digits for Numeric, up to 2
    /// characters for Alphanumeric, exactly 1 byte for Byte.
    pub(crate) fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conversion: {len}");
                data[0] as u16
            }
            Self::Kanji => unreachable!("Kanji is never selected for encoding"),
        }
    }

    /// Bit width of an encoded chunk of `len` characters.
    pub(crate) fn chunk_bits(&self, len: usize) -> usize {
        match (self, len) {
            (Self::Numeric, 3) => 10,
            (Self::Numeric, 2) => 7,
            (Self::Numeric, 1) => 4,
            (Self::Alphanumeric, 2) => 11,
            (Self::Alphanumeric, 1) => 6,
            (Self::Byte, 1) => 8,
            _ => unreachable!("Invalid chunk length {len} for {self:?}"),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => ALPHANUMERIC_CHARSET.contains(&byte),
            Self::Byte => true,
            Self::Kanji => false,
        }
    }

    /// Payload bits for `len` characters, excluding the header.
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
            Self::Kanji => len * 13,
        }
    }
}
