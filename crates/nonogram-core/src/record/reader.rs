use serde::Serialize;

use crate::error::{Error, Result};

use super::Record;

/// A baseline record that following records are stored as deltas against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub index: usize,
    pub record: Record,
}

/// A horizontal pixel run decoded from one record and its layer reference.
///
/// Values are raw and unchecked; the grid builder validates them against
/// the puzzle dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Stream position of the record this segment came from
    pub index: usize,
    pub row: i64,
    pub start: i64,
    pub length: i64,
    pub color: i64,
}

impl Segment {
    /// Exclusive end column
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.length)
    }
}

/// Cursor over a packed record stream
#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
    records: &'a [Record],
    position: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            position: 0,
        }
    }

    /// Index of the next record to be read
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when records remain past the cursor
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Records left past the cursor
    pub fn remaining(&self) -> usize {
        self.records.len().saturating_sub(self.position)
    }

    /// Advance past records that carry no decoded meaning
    pub fn skip(&mut self, count: usize) {
        self.position += count;
    }

    /// Read the next raw record
    pub fn read_record(&mut self) -> Result<(usize, &'a Record)> {
        let index = self.position;
        let record = self.records.get(index).ok_or(Error::TruncatedStream {
            index,
            len: self.records.len(),
        })?;
        self.position += 1;
        Ok((index, record))
    }

    /// Read a masked dimension (width, height, palette size)
    pub fn read_dimension(&mut self) -> Result<i64> {
        let (index, record) = self.read_record()?;
        record.dimension().ok_or(Error::ZeroModulus { index })
    }

    /// Read a masked segment count header
    pub fn read_segment_count(&mut self) -> Result<usize> {
        let (index, record) = self.read_record()?;
        let count = record
            .segment_count()
            .ok_or(Error::ZeroModulus { index })?;
        usize::try_from(count).map_err(|_| Error::InvalidHeader {
            field: "segment_count",
            value: count,
        })
    }

    /// Read a reference record
    pub fn read_reference(&mut self) -> Result<Reference> {
        let (index, record) = self.read_record()?;
        Ok(Reference {
            index,
            record: *record,
        })
    }

    /// Read one segment stored as a delta against `reference`
    pub fn read_segment(&mut self, reference: &Reference) -> Result<Segment> {
        let (index, record) = self.read_record()?;
        let base = &reference.record;
        Ok(Segment {
            index,
            row: record[3].wrapping_sub(base[3]).wrapping_sub(1),
            start: record[0].wrapping_sub(base[0]).wrapping_sub(1),
            length: record[1].wrapping_sub(base[1]),
            color: record[2].wrapping_sub(base[2]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_record_advances_cursor() {
        let records = [Record::new(1, 1, 1, 1), Record::new(2, 2, 2, 2)];
        let mut reader = RecordReader::new(&records);
        assert_eq!(reader.read_record().unwrap().0, 0);
        assert_eq!(reader.position(), 1);
        assert!(reader.has_remaining());
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_record().unwrap().1, &records[1]);
        assert!(!reader.has_remaining());
        reader.skip(2);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let records = [Record::new(1, 1, 1, 1)];
        let mut reader = RecordReader::new(&records);
        reader.skip(3);
        let err = reader.read_record().unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { index: 3, len: 1 }));
        assert!(err.is_malformed_stream());
    }

    #[test]
    fn test_read_dimension_zero_modulus() {
        let records = [Record::new(4, 5, 6, 0)];
        let mut reader = RecordReader::new(&records);
        assert!(matches!(
            reader.read_dimension(),
            Err(Error::ZeroModulus { index: 0 })
        ));
    }

    #[test]
    fn test_read_segment_count_negative() {
        // 0 + 0 + (-5 % 7) = -5
        let records = [Record::new(0, 0, -5, 7)];
        let mut reader = RecordReader::new(&records);
        assert!(matches!(
            reader.read_segment_count(),
            Err(Error::InvalidHeader {
                field: "segment_count",
                value: -5
            })
        ));
    }

    #[test]
    fn test_read_segment_applies_bias() {
        let records = [Record::new(10, 20, 30, 40), Record::new(13, 22, 31, 42)];
        let mut reader = RecordReader::new(&records);
        let reference = reader.read_reference().unwrap();
        let segment = reader.read_segment(&reference).unwrap();
        assert_eq!(
            segment,
            Segment {
                index: 1,
                row: 1,
                start: 2,
                length: 2,
                color: 1,
            }
        );
        assert_eq!(segment.end(), 4);
    }

    #[test]
    fn test_segment_end_saturates() {
        let segment = Segment {
            index: 9,
            row: 0,
            start: i64::MAX - 1,
            length: 5,
            color: 1,
        };
        assert_eq!(segment.end(), i64::MAX);
    }
}
