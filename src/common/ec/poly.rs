use std::fmt::{Display, Formatter};

use crate::common::galois::{exp, multiply};

// Polynomial arithmetic over GF(256)
//------------------------------------------------------------------------------
// Coefficients are stored highest degree first.

/// Product of `p1` and `p2`. An empty operand is the zero polynomial and yields an
/// empty product.
pub fn multiply_polynomials(p1: &[u8], p2: &[u8]) -> Vec<u8> {
    if p1.is_empty() || p2.is_empty() {
        return Vec::new();
    }

    let mut res = vec![0u8; p1.len() + p2.len() - 1];
    for (i, &a) in p1.iter().enumerate() {
        for (j, &b) in p2.iter().enumerate() {
            res[i + j] ^= multiply(a, b);
        }
    }
    res
}

/// Product of (x - a^i) for i in 0..ecc_count; degree `ecc_count`.
pub fn generator_polynomial(ecc_count: usize) -> Vec<u8> {
    debug_assert!(ecc_count < 256, "Generator degree out of range: {ecc_count}");

    (0..ecc_count).fold(vec![1], |acc, i| multiply_polynomials(&acc, &[1, exp(i)]))
}

/// Remainder of `message * x^n` divided by `generator`, where n is the generator degree.
/// The n remainder coefficients are the error correction codewords. An empty
/// generator has no degree and yields no codewords.
pub fn divide_by_generator(generator: &[u8], message: &[u8]) -> Vec<u8> {
    let Some(ecc_count) = generator.len().checked_sub(1) else {
        return Vec::new();
    };
    let len = message.len();

    let mut res = message.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }
        for (u, &g) in res[i..].iter_mut().zip(generator.iter()) {
            *u ^= multiply(g, lead_coeff);
        }
        debug_assert_eq!(res[i], 0, "Leading term should cancel out");
    }

    res.split_off(len)
}

/// Renders a polynomial as `c0X^n + ... + c(n-1)X + cn` for diagnostics.
pub struct PolyDisplay<'a>(pub &'a [u8]);

impl Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let deg = self.0.len().saturating_sub(1);
        for (i, coeff) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            match deg - i {
                0 => write!(f, "{coeff}")?,
                1 => write!(f, "{coeff}X")?,
                p => write!(f, "{coeff}X^{p}")?,
            }
        }
        Ok(())
    }
}
