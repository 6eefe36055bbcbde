use std::fmt;

use crate::utils::digits::validate_digits;
use crate::utils::errors::UtilsError;

/// Largest key a valid multiset can produce (`9999`)
pub const MAX_KEY: u16 = 9999;

/// Number of slots in a dense table addressed by [`CanonicalKey`]
pub const TABLE_SLOTS: usize = MAX_KEY as usize + 1;

/// Compare-and-swap pairs that sort any four values
pub const SORTING_NETWORK: [(usize, usize); 5] = [(0, 1), (2, 3), (0, 2), (1, 3), (1, 2)];

/// Sort four values with the fixed five-comparator network.
#[inline(always)]
pub fn sort4(mut v: [u8; 4]) -> [u8; 4] {
    for (i, j) in SORTING_NETWORK {
        if v[i] > v[j] {
            v.swap(i, j);
        }
    }
    v
}

/// Order-independent address of a digit multiset.
///
/// The digits are sorted ascending and packed as decimal positions, so
/// `{7, 1, 5, 4}` becomes `1457`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(u16);

impl CanonicalKey {
    /// # Errors
    ///
    /// Returns [`UtilsError::InvalidDigit`] if any digit is above 9.
    pub fn from_digits(digits: [u8; 4]) -> Result<Self, UtilsError> {
        let [d0, d1, d2, d3] = sort4(validate_digits(digits)?);
        Ok(Self(
            u16::from(d0) * 1000 + u16::from(d1) * 100 + u16::from(d2) * 10 + u16::from(d3),
        ))
    }

    /// Accept a raw key only if it is the canonical form of some multiset.
    pub fn from_value(value: u16) -> Option<Self> {
        if value > MAX_KEY {
            return None;
        }
        let key = Self(value);
        let [d0, d1, d2, d3] = key.digits();
        (d0 <= d1 && d1 <= d2 && d2 <= d3).then_some(key)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The sorted digits this key was packed from
    pub fn digits(self) -> [u8; 4] {
        let v = self.0;
        [
            (v / 1000 % 10) as u8,
            (v / 100 % 10) as u8,
            (v / 10 % 10) as u8,
            (v % 10) as u8,
        ]
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// # Errors
///
/// Returns [`UtilsError::InvalidDigit`] if any digit is above 9.
pub fn canonical_key(d1: u8, d2: u8, d3: u8, d4: u8) -> Result<CanonicalKey, UtilsError> {
    CanonicalKey::from_digits([d1, d2, d3, d4])
}
