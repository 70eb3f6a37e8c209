//! Packed puzzle records.
//!
//! A packed puzzle is a flat sequence of 4-integer records. Decoding is
//! driven entirely by record position, so all access goes through
//! [`RecordReader`], a cursor that hands out typed values in stream order.

pub mod layout;
mod reader;

use std::ops::Index;

use serde::{Deserialize, Serialize};

pub use reader::{RecordReader, Reference, Segment};

/// One `(a, b, c, modulus)` record of a packed puzzle stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record([i64; 4]);

impl Record {
    pub const fn new(a: i64, b: i64, c: i64, modulus: i64) -> Self {
        Self([a, b, c, modulus])
    }

    pub fn fields(&self) -> [i64; 4] {
        self.0
    }

    pub fn modulus(&self) -> i64 {
        self.0[3]
    }

    /// Recover a masked dimension: `a % m + b % m - c % m`.
    ///
    /// Returns `None` when the modulus is zero.
    pub fn dimension(&self) -> Option<i64> {
        let [a, b, c] = self.residues()?;
        Some(a.wrapping_add(b).wrapping_sub(c))
    }

    /// Recover a masked segment count: `(a % m)^2 + 2 * (b % m) + c % m`.
    ///
    /// Returns `None` when the modulus is zero.
    pub fn segment_count(&self) -> Option<i64> {
        let [a, b, c] = self.residues()?;
        Some(a.wrapping_mul(a).wrapping_add(b.wrapping_mul(2)).wrapping_add(c))
    }

    fn residues(&self) -> Option<[i64; 3]> {
        let m = self.modulus();
        if m == 0 {
            return None;
        }
        let [a, b, c, _] = self.0;
        Some([a.wrapping_rem(m), b.wrapping_rem(m), c.wrapping_rem(m)])
    }
}

impl From<[i64; 4]> for Record {
    fn from(fields: [i64; 4]) -> Self {
        Self(fields)
    }
}

impl Index<usize> for Record {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_plain_values() {
        // 7 + 5 - 2
        assert_eq!(Record::new(7, 5, 2, 100).dimension(), Some(10));
    }

    #[test]
    fn test_dimension_ignores_modulus_multiples() {
        let base = Record::new(7, 5, 2, 13);
        let expected = base.dimension();
        for k in 0..5 {
            let shift = 13 * k;
            assert_eq!(Record::new(7 + shift, 5, 2, 13).dimension(), expected);
            assert_eq!(Record::new(7, 5 + shift, 2, 13).dimension(), expected);
            assert_eq!(Record::new(7, 5, 2 + shift, 13).dimension(), expected);
            assert_eq!(
                Record::new(7 + shift, 5 + 2 * shift, 2 + 3 * shift, 13).dimension(),
                expected
            );
        }
    }

    #[test]
    fn test_segment_count_formula() {
        // 3^2 + 2*4 + 1
        assert_eq!(Record::new(3, 4, 1, 50).segment_count(), Some(18));
        assert_eq!(Record::new(53, 104, 151, 50).segment_count(), Some(18));
    }

    #[test]
    fn test_zero_modulus_is_rejected() {
        assert_eq!(Record::new(1, 2, 3, 0).dimension(), None);
        assert_eq!(Record::new(1, 2, 3, 0).segment_count(), None);
    }

    #[test]
    fn test_extreme_fields_do_not_overflow() {
        assert_eq!(Record::new(i64::MIN, i64::MAX, i64::MIN, -1).dimension(), Some(0));
        let huge = Record::new(i64::MAX - 1, i64::MAX - 1, i64::MAX - 1, i64::MAX);
        assert!(huge.dimension().is_some());
        assert!(huge.segment_count().is_some());
    }

    #[test]
    fn test_record_index_and_serde() {
        let record = Record::new(1, 2, 3, 4);
        assert_eq!(record[0], 1);
        assert_eq!(record[3], 4);
        assert_eq!(serde_json::to_string(&record).unwrap(), "[1,2,3,4]");
        let parsed: Record = serde_json::from_str("[9,8,7,6]").unwrap();
        assert_eq!(parsed, Record::new(9, 8, 7, 6));
    }
}
