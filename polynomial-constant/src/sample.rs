use base_decoder::decode_base;

use crate::error::Result;

/// A point `(x, y)` the unknown polynomial passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplePoint {
    pub x: i64,
    pub y: i64,
}

impl SamplePoint {
    pub fn new(x: i64, y: i64) -> Self {
        SamplePoint { x, y }
    }
}

impl From<(i64, i64)> for SamplePoint {
    fn from((x, y): (i64, i64)) -> Self {
        SamplePoint::new(x, y)
    }
}

/// A sample point whose y value is still a digit string in some base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: i64,
    pub base: u32,
    pub digits: String,
}

impl EncodedShare {
    pub fn new(x: i64, base: u32, digits: impl Into<String>) -> Self {
        EncodedShare {
            x,
            base,
            digits: digits.into(),
        }
    }

    /// Decode the y value. Magnitudes beyond i64 wrap, see [`decode_base`].
    pub fn decode(&self) -> Result<SamplePoint> {
        let y = decode_base(&self.digits, self.base)?;
        log::debug!("share x = {}: {:?} (base {}) -> {y}", self.x, self.digits, self.base);
        Ok(SamplePoint::new(self.x, y))
    }
}

/// Decode every share, stopping at the first failure.
pub fn decode_shares(shares: &[EncodedShare]) -> Result<Vec<SamplePoint>> {
    shares.iter().map(EncodedShare::decode).collect()
}
