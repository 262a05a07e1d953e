use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over row-major canvas indices
///
/// Tracks which pixels have been colored. Membership only ever grows during a
/// generation pass, so the number of members is kept alongside the bits.
#[derive(Clone, Debug)]
pub struct PixelMask {
    bits: BitVec,
    count: usize,
}

impl PixelMask {
    /// Create a mask with no pixels present
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
            count: 0,
        }
    }

    /// Insert a pixel index
    ///
    /// Returns `true` if the pixel was not present before. Indices beyond the
    /// mask length are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.bits.len() || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        self.count += 1;
        true
    }

    /// Test pixel membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of pixels present
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Test if no pixels are present
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Test if every pixel is present
    pub fn is_full(&self) -> bool {
        self.count == self.bits.len()
    }
}

impl fmt::Display for PixelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelMask({}/{} pixels)", self.count, self.bits.len())
    }
}
