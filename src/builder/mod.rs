mod ec;
mod qr;

pub use ec::{blockify, compute_ecc, interleave, interleave_blocks};
pub use qr::{Module, QR};

use tracing::{debug, info};

use crate::common::{
    bit_utils::BitStream,
    codec::{encode as encode_data, encode_with_version, Mode},
    error::QRResult,
    metadata::{ECLevel, Version},
};

/// Encodes `data` at `ec_level` into a finished symbol, choosing the smallest version
/// that holds it.
pub fn encode(data: &str, ec_level: ECLevel) -> QRResult<QR> {
    QRBuilder::new(data.as_bytes()).ec_level(ec_level).build()
}

pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::M }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!("{{ Version: {}, Ec level: {:?} }}", v, self.ec_level),
            None => format!("{{ Version: None, Ec level: {:?} }}", self.ec_level),
        }
    }
}

#[cfg(test)]
mod qrbuilder_util_tests {
    use super::QRBuilder;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_metadata() {
        let data = "Hello, world!".as_bytes();
        let mut qr_builder = QRBuilder::new(data);
        qr_builder.version(Version::new(0).unwrap()).ec_level(ECLevel::L);
        assert_eq!(qr_builder.metadata(), "{ Version: 1, Ec level: L }");
        qr_builder.unset_version();
        assert_eq!(qr_builder.metadata(), "{ Version: None, Ec level: L }");
    }

    #[test]
    fn test_default_ec_level() {
        let qr_builder = QRBuilder::new(b"123");
        assert_eq!(qr_builder.metadata(), "{ Version: None, Ec level: M }");
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        // Encode data
        let (encoded_data, version, mode) = match self.version {
            Some(v) => {
                let mode = Mode::classify(self.data);
                (encode_with_version(self.data, mode, v, self.ec_level)?, v, mode)
            }
            None => encode_data(self.data, self.ec_level)?,
        };
        debug!(
            version = version.number(),
            ?mode,
            data_codewords = encoded_data.len() >> 3,
            "Encoded data"
        );

        let payload = Self::build_payload(&encoded_data, version, self.ec_level);

        let mut qr = QR::new(version, self.ec_level, mode);
        qr.draw_all_function_patterns();
        debug!(free_modules = qr.count_empty_modules(), "Drew function patterns");

        qr.draw_encoding_region(payload)?;

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            "Generated QR {}: dark {dark_modules}, light {}",
            qr.metadata(),
            total_modules - dark_modules
        );

        Ok(qr)
    }

    // Data and error correction codewords interleaved, then the remainder bits
    fn build_payload(encoded_data: &BitStream, version: Version, ec_level: ECLevel) -> BitStream {
        let blocks = compute_ecc(encoded_data.data(), version, ec_level);
        let bs = version.block_structure(ec_level);
        debug!(
            blocks = bs.block_count(),
            group1 = ?bs.group1,
            group2 = ?bs.group2,
            ecc_per_block = bs.ecc_per_block,
            "Computed error correction"
        );

        let codewords = interleave_blocks(&blocks);
        let remainder = version.remainder_bits();
        let mut payload = BitStream::new((codewords.len() << 3) + remainder);
        payload.extend(&codewords);
        for _ in 0..remainder {
            payload.push(false);
        }
        payload
    }
}
