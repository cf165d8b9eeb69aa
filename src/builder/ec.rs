use std::ops::Deref;

use tracing::trace;

use crate::common::{
    ec::{generator_polynomial, Block, PolyDisplay},
    metadata::{ECLevel, Version},
};

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

/// Splits the data codewords into Reed-Solomon blocks and appends the error
/// correction codewords of each. The generator polynomial is computed once and shared.
pub fn compute_ecc(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<Block> {
    let data_blocks = blockify(data, version, ec_level);

    let ecc_count = version.ecc_per_block(ec_level);
    let generator = generator_polynomial(ecc_count);
    trace!(degree = ecc_count, generator = %PolyDisplay(&generator), "Generator polynomial");

    data_blocks.iter().map(|b| Block::new(b, &generator)).collect()
}

/// Slices `data` into the blocks of group 1 followed by the blocks of group 2.
pub fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
    let bs = version.block_structure(ec_level);
    let (count1, size1) = bs.group1;
    let total_block1_size = count1 * size1;

    debug_assert!(
        bs.data_codewords() == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        bs.data_codewords()
    );

    let mut data_blocks = Vec::with_capacity(bs.block_count());
    data_blocks.extend(data[..total_block1_size].chunks(size1));
    if let Some((_, size2)) = bs.group2 {
        data_blocks.extend(data[total_block1_size..].chunks(size2));
    }
    data_blocks
}

/// Column-wise merge: the i-th element of every block in turn. Blocks shorter than `i`
/// are skipped.
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

/// Interleaved data codewords followed by interleaved error correction codewords.
pub fn interleave_blocks(blocks: &[Block]) -> Vec<u8> {
    let data: Vec<&[u8]> = blocks.iter().map(Block::data).collect();
    let ecc: Vec<&[u8]> = blocks.iter().map(Block::ecc).collect();
    let mut res = interleave(&data);
    res.extend(interleave(&ecc));
    res
}
