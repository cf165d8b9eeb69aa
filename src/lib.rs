//! # qrweave
//!
//! A QR code encoder: mode selection, bit packing, Reed-Solomon error correction over
//! GF(256), block interleaving and zigzag module placement.
//!
//! ## Features
//!
//! - **Mode selection**: Numeric, Alphanumeric or Byte, whichever is narrowest for the input
//! - **Version selection**: Smallest of the 40 versions whose capacity strictly exceeds the input
//! - **Reed-Solomon Error Correction**: Per block correction codewords for levels L, M, Q and H
//! - **Rendering**: Module grid as bits, a text dump or a grayscale image
//!
//! Masking and the contents of the format and version information areas are not
//! computed; those areas are reserved and left light.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrweave::{encode, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = encode("8675309", ECLevel::L)?;
//! assert_eq!(qr.width(), 21);
//!
//! let bits = qr.to_bits();  // 1 for dark, 0 for light
//! assert_eq!(bits[0][0], 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrweave::{QRBuilder, ECLevel, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"HELLO WORLD")
//!     .version(Version::new(1)?)  // Zero-based index - if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::Q)       // Error correction level - if not provided, defaults to ECLevel::M
//!     .build()?;
//!
//! let img = qr.to_image(4);  // 4x scale factor
//! assert_eq!(img.width(), (25 + 8) * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - Indices 0-39, printed as versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{encode, Module, QRBuilder, QR};
pub use common::codec::Mode;
pub use common::ec::{divide_by_generator, generator_polynomial, multiply_polynomials};
pub use common::error::{QRError, QRResult};
pub use common::galois::{exp, log, multiply};
pub use common::metadata::{finder_positions, BlockStructure, Color, ECLevel, Version};
