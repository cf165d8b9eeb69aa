use super::error::{QRError, QRResult};

// GF(256) tables
//------------------------------------------------------------------------------

// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE: u16 = 0x11d;

// Evaluated at compile time. Index 255 aliases index 0 since a^255 = 1.
pub(crate) static EXP_TABLE: [u8; 256] = build_tables().0;
pub(crate) static LOG_TABLE: [u8; 256] = build_tables().1;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x >= 256 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    exp[255] = exp[0];
    (exp, log)
}

// Field operations
//------------------------------------------------------------------------------

#[inline]
pub fn exp(n: usize) -> u8 {
    debug_assert!(n < 256, "Exponent out of table range: {n}");
    EXP_TABLE[n]
}

#[inline]
pub fn log(n: u8) -> QRResult<u8> {
    if n == 0 {
        return Err(QRError::DomainError(n));
    }
    Ok(LOG_TABLE[n as usize])
}

#[inline]
pub fn multiply(x: u8, y: u8) -> u8 {
    if x == 0 || y == 0 {
        return 0;
    }
    let log_sum = (LOG_TABLE[x as usize] as usize + LOG_TABLE[y as usize] as usize) % 255;
    EXP_TABLE[log_sum]
}
