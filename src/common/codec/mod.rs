pub mod encoder;
pub mod types;

pub use encoder::*;
pub use types::*;

pub static PADDING_CODEWORDS: [u8; 2] = [0b11101100, 0b00010001];

// Codec proptesting
//------------------------------------------------------------------------------

#[cfg(test)]
mod codec_proptests {
    use proptest::prelude::*;

    use super::{encode, encode_with_version, Mode};
    use crate::common::metadata::{ECLevel, Version};

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #[test]
        fn proptest_encode_fills_capacity(data in "[ -~]{0,300}", ecl in ec_level_strategy()) {
            let (bs, ver, mode) = encode(data.as_bytes(), ecl).unwrap();
            prop_assert_eq!(mode, Mode::classify(data.as_bytes()));
            prop_assert_eq!(bs.len(), ver.data_bit_capacity(ecl));
            prop_assert!(ver.capacity(mode, ecl) > data.len());
        }

        #[test]
        fn proptest_smallest_version(data in "[0-9]{1,400}", ecl in ec_level_strategy()) {
            let (_, ver, mode) = encode(data.as_bytes(), ecl).unwrap();
            if ver.index() > 0 {
                let prev = Version::new(ver.index() - 1).unwrap();
                prop_assert!(encode_with_version(data.as_bytes(), mode, prev, ecl).is_err());
            }
        }
    }
}
