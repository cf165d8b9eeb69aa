use std::fmt::Display;

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Fixed capacity MSB-first bit buffer. Used both for the packed data codewords and
/// for the final interleaved payload.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: Box<[u8; MAX_PAYLOAD_SIZE]>,
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity <= MAX_PAYLOAD_SIZE << 3,
            "Capacity exceeds max payload size: {capacity}"
        );
        Self { data: Box::new([0; MAX_PAYLOAD_SIZE]), len: 0, capacity, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bits still free before reaching capacity
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    /// Renders the stream as a string of '0' and '1'.
    pub fn to_bit_string(&self) -> String {
        (0..self.len).map(|i| if self.bit_at(i) { '1' } else { '0' }).collect()
    }

    fn bit_at(&self, i: usize) -> bool {
        (self.data[i >> 3] << (i & 7)) & 0b10000000 != 0
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Into<u32> + Display,
    {
        let max_bits = T::zero().count_zeros() as usize;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        let bits: u32 = bits.into();
        let mut size = size;
        while size > 0 {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            let room = 8 - offset;
            let n = room.min(size);
            let chunk = ((bits >> (size - n)) & ((1 << n) - 1)) as u8;
            self.data[pos] |= chunk << (room - n);
            self.len += n;
            size -= n;
        }
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let pos = self.len >> 3;
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );
        self.data[pos..pos + arr.len()].copy_from_slice(arr);
        self.len += arr_bits;
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn take_bit(&mut self) -> Option<bool> {
        if self.cursor == self.len {
            return None;
        }

        let bit = self.bit_at(self.cursor);
        self.cursor += 1;
        Some(bit)
    }

    /// Bits not yet taken
    pub fn untaken(&self) -> usize {
        self.len - self.cursor
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}


// Global constants
//------------------------------------------------------------------------------

// Largest payload is 3706 codewords plus remainder bits
pub const MAX_PAYLOAD_SIZE: usize = 4096;
