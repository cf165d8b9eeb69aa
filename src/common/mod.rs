pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod error;
pub mod galois;
pub mod iter;
pub mod metadata;
mod version_db;

