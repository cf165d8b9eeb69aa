mod block;
mod poly;

pub use block::*;
pub use poly::*;

pub const MAX_BLOCK_SIZE: usize = 256;
