pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::debug;

    use super::writer::{pad_remaining_capacity, push_data, push_header, push_terminator};
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::Mode;
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    /// Classifies `data`, picks the smallest version that holds it and packs it into
    /// exactly `data_codewords * 8` bits.
    pub fn encode(data: &[u8], ecl: ECLevel) -> QRResult<(BitStream, Version, Mode)> {
        let mode = Mode::classify(data);
        let ver = find_version(data.len(), mode, ecl)?;
        debug!(?mode, version = ver.number(), len = data.len(), "Selected mode and version");
        let bs = encode_with_version(data, mode, ver, ecl)?;
        Ok((bs, ver, mode))
    }

    pub fn encode_with_version(
        data: &[u8],
        mode: Mode,
        ver: Version,
        ecl: ECLevel,
    ) -> QRResult<BitStream> {
        let len = data.len();
        if ver.capacity(mode, ecl) <= len {
            return Err(QRError::CapacityExceeded { len, mode, ec_level: ecl });
        }

        let mut bs = BitStream::new(ver.data_bit_capacity(ecl));
        push_header(mode, len, ver, &mut bs);
        push_data(mode, data, &mut bs);
        debug_assert_eq!(
            bs.len(),
            ver.mode_bits() + ver.char_cnt_bits(mode) + mode.encoded_len(len),
            "Header and payload length mismatch"
        );
        debug!(bits = bs.len(), capacity = bs.capacity(), "Packed header and payload");

        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        Ok(bs)
    }

    /// Smallest version whose capacity strictly exceeds `len`.
    pub fn find_version(len: usize, mode: Mode, ecl: ECLevel) -> QRResult<Version> {
        Version::all()
            .find(|v| v.capacity(mode, ecl) > len)
            .ok_or(QRError::CapacityExceeded { len, mode, ec_level: ecl })
    }

    #[cfg(test)]
    mod encode_tests {
        use test_case::test_case;

        use super::{encode, encode_with_version, find_version, ECLevel, Mode, Version};
        use crate::common::error::QRError;

        #[test_case(7, Mode::Numeric, ECLevel::L, 0)]
        #[test_case(40, Mode::Numeric, ECLevel::L, 0)]
        #[test_case(41, Mode::Numeric, ECLevel::L, 1)]
        #[test_case(11, Mode::Alphanumeric, ECLevel::M, 0)]
        #[test_case(20, Mode::Alphanumeric, ECLevel::M, 1)]
        #[test_case(14, Mode::Byte, ECLevel::M, 1)]
        #[test_case(2952, Mode::Byte, ECLevel::L, 39)]
        fn test_find_version(len: usize, mode: Mode, ecl: ECLevel, exp: usize) {
            assert_eq!(find_version(len, mode, ecl).unwrap().index(), exp);
        }

        #[test]
        fn test_find_version_exceeded() {
            let err = find_version(2953, Mode::Byte, ECLevel::L).unwrap_err();
            assert_eq!(
                err,
                QRError::CapacityExceeded { len: 2953, mode: Mode::Byte, ec_level: ECLevel::L }
            );
        }

        #[test]
        fn test_encode_numeric() {
            let (bs, ver, mode) = encode(b"8675309", ECLevel::L).unwrap();
            assert_eq!(mode, Mode::Numeric);
            assert_eq!(ver.index(), 0);
            let exp = [16, 31, 99, 132, 164, 0, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17];
            assert_eq!(&bs.data()[..18], &exp);
            assert_eq!(bs.data()[18], 236);
        }

        #[test]
        fn test_encode_alphanumeric() {
            let (bs, ver, mode) = encode(b"HELLO WORLD", ECLevel::M).unwrap();
            assert_eq!(mode, Mode::Alphanumeric);
            assert_eq!(ver.index(), 0);
            assert_eq!(bs.data(), b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11");
        }

        #[test]
        fn test_encode_byte() {
            let (bs, _, mode) = encode(b"hello", ECLevel::L).unwrap();
            assert_eq!(mode, Mode::Byte);
            assert_eq!(&bs.data()[..7], &[64, 86, 134, 86, 198, 198, 240]);
            assert_eq!(bs.len(), 19 * 8);
        }

        #[test]
        fn test_encode_alphanumeric_zero_index_pair() {
            let (bs, _, _) = encode(b"A0", ECLevel::H).unwrap();
            assert_eq!(bs.data(), &[32, 17, 194, 0, 236, 17, 236, 17, 236]);
        }

        #[test]
        fn test_encode_empty() {
            let (bs, ver, mode) = encode(b"", ECLevel::Q).unwrap();
            assert_eq!(mode, Mode::Numeric);
            assert_eq!(ver.index(), 0);
            assert_eq!(&bs.data()[..3], &[0b00010000, 0b00000000, 0b00000000]);
            assert_eq!(bs.len(), ver.data_bit_capacity(ECLevel::Q));
        }

        #[test]
        fn test_encode_with_version_at_capacity() {
            let data = "1".repeat(41);
            let ver = Version::new(0).unwrap();
            let res = encode_with_version(data.as_bytes(), Mode::Numeric, ver, ECLevel::L);
            assert!(matches!(res, Err(QRError::CapacityExceeded { len: 41, .. })));
        }

        #[test]
        fn test_encode_fills_data_capacity() {
            for (data, ecl) in [("1".repeat(100), ECLevel::H), ("AB".repeat(60), ECLevel::Q)] {
                let (bs, ver, _) = encode(data.as_bytes(), ecl).unwrap();
                assert_eq!(bs.len(), ver.data_codewords(ecl) * 8);
            }
        }
    }
}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, PADDING_CODEWORDS};
    use crate::common::metadata::Version;

    pub fn push_header(mode: Mode, char_cnt: usize, ver: Version, out: &mut BitStream) {
        let len_bits = ver.char_cnt_bits(mode);
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(mode.indicator(), ver.mode_bits());
        out.push_bits(char_cnt as u16, len_bits);
    }

    pub fn push_data(mode: Mode, data: &[u8], out: &mut BitStream) {
        match mode {
            Mode::Numeric => push_chunks(mode, data, 3, out),
            Mode::Alphanumeric => push_chunks(mode, data, 2, out),
            Mode::Byte => push_chunks(mode, data, 1, out),
            Mode::Kanji => unreachable!("Kanji is never selected for encoding"),
        }
    }

    // The width of the trailing chunk follows its length, so a final chunk whose
    // value is 0 is still emitted.
    fn push_chunks(mode: Mode, data: &[u8], chunk_sz: usize, out: &mut BitStream) {
        for chunk in data.chunks(chunk_sz) {
            let bits = mode.encode_chunk(chunk);
            out.push_bits(bits, mode.chunk_bits(chunk.len()));
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let term_len = std::cmp::min(4, out.remaining());
        out.push_bits(0u8, term_len);
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = out.remaining() >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

    #[cfg(test)]
    mod writer_tests {
        use super::{
            push_data, push_header, push_padding_bits, push_padding_codewords, push_terminator,
            BitStream, Mode, Version, PADDING_CODEWORDS,
        };
        use crate::common::metadata::ECLevel;

        fn stream(ver: Version) -> BitStream {
            BitStream::new(ver.data_bit_capacity(ECLevel::L))
        }

        #[test]
        fn test_push_header_v1() {
            let ver = Version::from_index(0);
            let exp_vecs: Vec<Vec<u8>> = vec![
                vec![0b00011111, 0b11111100],
                vec![0b00101111, 0b11111000],
                vec![0b01001111, 0b11110000],
            ];
            let modes = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];
            let counts = [1023, 511, 255];
            for ((mode, cnt), exp_vec) in modes.iter().zip(counts).zip(exp_vecs.iter()) {
                let mut bs = stream(ver);
                push_header(*mode, cnt, ver, &mut bs);
                assert_eq!(bs.data(), exp_vec);
            }
        }

        #[test]
        fn test_push_header_v10() {
            let ver = Version::from_index(9);
            let exp_vecs: Vec<Vec<u8>> = vec![
                vec![0b00011111, 0b11111111],
                vec![0b00101111, 0b11111110],
                vec![0b01001111, 0b11111111, 0b11110000],
            ];
            let modes = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];
            let counts = [4095, 2047, 65535];
            for ((mode, cnt), exp_vec) in modes.iter().zip(counts).zip(exp_vecs.iter()) {
                let mut bs = stream(ver);
                push_header(*mode, cnt, ver, &mut bs);
                assert_eq!(bs.data(), exp_vec);
            }
        }

        #[test]
        fn test_push_header_v27() {
            let ver = Version::from_index(26);
            let exp_vecs: Vec<Vec<u8>> = vec![
                vec![0b00011111, 0b11111111, 0b11000000],
                vec![0b00101111, 0b11111111, 0b10000000],
                vec![0b01001111, 0b11111111, 0b11110000],
            ];
            let modes = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];
            let counts = [16383, 8191, 65535];
            for ((mode, cnt), exp_vec) in modes.iter().zip(counts).zip(exp_vecs.iter()) {
                let mut bs = stream(ver);
                push_header(*mode, cnt, ver, &mut bs);
                assert_eq!(bs.data(), exp_vec);
            }
        }

        #[test]
        fn test_push_numeric_data() {
            let ver = Version::from_index(0);
            let mut bs = stream(ver);
            push_data(Mode::Numeric, b"123", &mut bs);
            assert_eq!(bs.to_bit_string(), "0001111011");
            let mut bs = stream(ver);
            push_data(Mode::Numeric, b"01234567", &mut bs);
            assert_eq!(bs.data(), vec![0b00000011, 0b00010101, 0b10011000, 0b01100000]);
            let mut bs = stream(ver);
            push_data(Mode::Numeric, b"8", &mut bs);
            assert_eq!(bs.to_bit_string(), "1000");
            let mut bs = stream(ver);
            push_data(Mode::Numeric, b"1200", &mut bs);
            assert_eq!(bs.to_bit_string(), "00011110000000");
        }

        #[test]
        fn test_push_alphanumeric_data() {
            let ver = Version::from_index(0);
            let mut bs = stream(ver);
            push_data(Mode::Alphanumeric, b"AC-42", &mut bs);
            assert_eq!(bs.data(), vec![0b00111001, 0b11011100, 0b11100100, 0b00100000]);
            let mut bs = stream(ver);
            push_data(Mode::Alphanumeric, b"A00", &mut bs);
            assert_eq!(bs.to_bit_string(), "00111000010000000");
        }

        #[test]
        fn test_push_byte_data() {
            let ver = Version::from_index(0);
            let mut bs = stream(ver);
            push_data(Mode::Byte, b"a", &mut bs);
            assert_eq!(bs.data(), vec![0b01100001])
        }

        #[test]
        fn test_push_terminator() {
            let ver = Version::from_index(0);
            let bit_capacity = ver.data_bit_capacity(ECLevel::L);
            let capacity = bit_capacity >> 3;
            let mut bs = stream(ver);
            bs.push_bits(0b1u8, 1);
            push_terminator(&mut bs);
            assert_eq!(bs.data(), vec![0b10000000]);
            assert_eq!(bs.len(), 5);
            let mut bs = stream(ver);
            for _ in 0..capacity - 1 {
                bs.push_bits(0b11111111u8, 8);
            }
            bs.push_bits(0b111111u8, 6);
            push_terminator(&mut bs);
            assert_eq!(bs.len(), bit_capacity);
        }

        #[test]
        fn test_push_padding_bits() {
            let ver = Version::from_index(0);
            let mut bs = stream(ver);
            bs.push_bits(1u8, 1);
            push_padding_bits(&mut bs);
            assert_eq!(bs.data(), vec![0b10000000]);
            assert_eq!(bs.len() & 7, 0);
        }

        #[test]
        fn test_push_padding_codewords() {
            let ver = Version::from_index(0);
            let mut bs = stream(ver);
            bs.push_bits(1u8, 1);
            push_padding_bits(&mut bs);
            push_padding_codewords(&mut bs);
            let mut output = vec![0b10000000];
            output.extend(PADDING_CODEWORDS.iter().cycle().take(18));
            assert_eq!(bs.data(), output);
        }
    }
}
