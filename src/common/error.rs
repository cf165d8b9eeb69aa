use thiserror::Error;

use super::codec::Mode;
use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    /// Logarithm requested for a value outside the multiplicative group of GF(256)
    #[error("logarithm undefined for {0} in GF(256)")]
    DomainError(u8),

    /// No version holds the input at the requested level
    #[error("data of length {len} exceeds {mode:?} capacity at level {ec_level:?}")]
    CapacityExceeded { len: usize, mode: Mode, ec_level: ECLevel },

    /// Zigzag placement ran out of modules before the payload was consumed
    #[error("data overflow: {remaining} payload bits left after placement")]
    DataOverflow { remaining: usize },

    /// Placement finished with modules still unset
    #[error("{0} modules left unset after placement")]
    UnfilledModules(usize),

    #[error("invalid version index {0}")]
    InvalidVersion(usize),
}

pub type QRResult<T> = Result<T, QRError>;
