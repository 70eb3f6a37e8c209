use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::record::{Record, RecordReader, Reference};

/// One decoded palette color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Six lowercase hex digits, without a leading `#`
    pub hex: String,
    pub color_id: i64,
}

impl PaletteEntry {
    /// Decode an entry stored against the palette reference.
    ///
    /// The record fields are matched against a permutation of the
    /// reference fields: channel 0 uses `ref[1]`, channel 1 `ref[0]`,
    /// channel 2 `ref[3]`, and the color id `ref[2]`.
    pub fn decode(record: &Record, reference: &Reference) -> Self {
        let base = &reference.record;
        let red = record[0].wrapping_sub(base[1]);
        let green = record[1].wrapping_sub(base[0]);
        let blue = record[2].wrapping_sub(base[3]);
        let color_id = record[3].wrapping_sub(red).wrapping_sub(base[2]);

        Self {
            hex: format!("{:02x}{:04x}", wrap_byte(red), low_word(green, blue)),
            color_id,
        }
    }

    /// Color as an `(r, g, b)` triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        let value = u32::from_str_radix(&self.hex, 16).unwrap_or(0);
        ((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

fn wrap_byte(channel: i64) -> u8 {
    channel.rem_euclid(256) as u8
}

/// Green and blue as one 16-bit value; a negative blue borrows from green
fn low_word(green: i64, blue: i64) -> u16 {
    green
        .wrapping_add(256)
        .wrapping_shl(8)
        .wrapping_add(blue)
        .rem_euclid(0x10000) as u16
}

/// Decoded color table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// A puzzle with more than one palette color uses colored clues
    pub fn is_multicolor(&self) -> bool {
        self.entries.len() > 1
    }

    /// Look up an entry by its decoded color id
    pub fn find(&self, color_id: u32) -> Option<&PaletteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.color_id == i64::from(color_id))
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read the palette reference and `size` entries that follow it
pub fn decode_palette(reader: &mut RecordReader<'_>, size: usize) -> Result<Palette> {
    let reference = reader.read_reference()?;

    let mut entries = Vec::with_capacity(size);
    for _ in 0..size {
        let (index, record) = reader.read_record()?;
        let entry = PaletteEntry::decode(record, &reference);
        debug!("Palette[{}]: #{} id={}", index, entry.hex, entry.color_id);
        entries.push(entry);
    }

    Ok(Palette::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn reference(fields: [i64; 4]) -> Reference {
        Reference {
            index: 4,
            record: Record::from(fields),
        }
    }

    #[test]
    fn test_decode_entry_permutation() {
        let reference = reference([10, 20, 30, 40]);
        // red = 0x12 + 20, green = 0x34 + 10, blue = 0x56 + 40
        // color_id = d - red - 30
        let record = Record::new(0x12 + 20, 0x34 + 10, 0x56 + 40, 3 + 0x12 + 30);
        let entry = PaletteEntry::decode(&record, &reference);
        assert_eq!(entry.hex, "123456");
        assert_eq!(entry.color_id, 3);
        assert_eq!(entry.rgb(), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_decode_entry_wraps_negative_channels() {
        let reference = reference([0, 5, 0, 0]);
        let record = Record::new(4, 255, 256, 0);
        let entry = PaletteEntry::decode(&record, &reference);
        // red = -1 -> ff; blue = 256 carries into green: 0xff00 + 0x100 -> 0000
        assert_eq!(entry.hex, "ff0000");
        assert_eq!(entry.color_id, 1);
    }

    #[test]
    fn test_decode_entry_negative_blue_borrows_from_green() {
        let reference = reference([0, 0, 0, 1]);
        let entry = PaletteEntry::decode(&Record::new(0, 5, 0, 1), &reference);
        // green = 5, blue = -1 -> 0x0500 - 1
        assert_eq!(entry.hex, "0004ff");
        assert_eq!(entry.color_id, 1);
        assert_eq!(entry.rgb(), (0x00, 0x04, 0xff));
    }

    #[test]
    fn test_hex_is_lowercase_six_digits() {
        let reference = reference([0, 0, 0, 0]);
        let entry = PaletteEntry::decode(&Record::new(0xab, 0x0c, 0x0d, 0xab + 1), &reference);
        assert_eq!(entry.hex, "ab0c0d");
        assert_eq!(entry.hex.len(), 6);
    }

    #[test]
    fn test_decode_palette_reads_reference_then_entries() {
        let records = vec![
            Record::new(1, 2, 3, 4),
            Record::new(2, 1, 4, 5),
            Record::new(257, 256, 259, 261),
        ];
        let mut reader = RecordReader::new(&records);
        let palette = decode_palette(&mut reader, 2).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(palette.is_multicolor());
        assert_eq!(palette.entries()[0].hex, "000000");
        assert_eq!(palette.entries()[0].color_id, 2);
        assert_eq!(palette.entries()[1].hex, "ffffff");
        assert_eq!(palette.find(2).unwrap().hex, "000000");
        assert_eq!(palette.find(3).unwrap().hex, "ffffff");
        assert!(palette.find(9).is_none());
    }

    #[test]
    fn test_decode_palette_truncated() {
        let records = vec![Record::new(1, 2, 3, 4), Record::new(2, 1, 4, 5)];
        let mut reader = RecordReader::new(&records);
        assert!(matches!(
            decode_palette(&mut reader, 2),
            Err(Error::TruncatedStream { index: 2, len: 2 })
        ));
    }
}
