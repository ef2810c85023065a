//! View over a foreign heap-allocated engine string (`FString`).

use encoding_rs::UTF_16LE;

use crate::containers::ArrayView;
use crate::error::Result;
use crate::memory::{MemValue, ReadMemory};

/// Dynamic array of UTF-16 code units whose count includes a trailing NUL.
///
/// The header is the same 16-byte dynamic-array header the engine uses
/// everywhere; only the count convention differs, so the decoded text has
/// `num - 1` characters.
#[derive(Debug, Clone, Copy)]
pub struct StringView {
    pub array: ArrayView<u16>,
}

impl MemValue for StringView {
    const SIZE: usize = ArrayView::<u16>::SIZE;
    const ALIGN: usize = 8;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            array: ArrayView::from_bytes(bytes),
        }
    }
}

impl StringView {
    /// Read the string header at a foreign address.
    pub fn read<R: ReadMemory>(reader: &R, address: u64) -> Result<Self> {
        reader.read_value(address)
    }

    /// Length in UTF-16 code units, excluding the trailing NUL.
    pub fn len(&self) -> usize {
        self.array.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the text. Unallocated or NUL-only strings are empty.
    pub fn to_text<R: ReadMemory>(&self, reader: &R) -> Result<String> {
        if self.array.data == 0 || self.len() == 0 {
            return Ok(String::new());
        }
        let bytes = reader.read_bytes(self.array.data, self.len() * 2)?;
        let (decoded, _, _) = UTF_16LE.decode(&bytes);
        Ok(decoded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    const HEADER: u64 = 0x1000;
    const DATA: u64 = 0x2000;

    #[test]
    fn test_count_includes_trailing_nul() {
        let text: Vec<u8> = "Vector"
            .encode_utf16()
            .chain(std::iter::once(0))
            .flat_map(|u| u.to_le_bytes())
            .collect();
        let reader = MockMemoryBuilder::new()
            .array_header(HEADER, DATA, 7, 8)
            .bytes(DATA, &text)
            .build();

        let s = StringView::read(&reader, HEADER).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(s.to_text(&reader).unwrap(), "Vector");
    }

    #[test]
    fn test_unallocated_and_nul_only_strings_are_empty() {
        let reader = MockMemoryBuilder::new()
            .array_header(HEADER, 0, 0, 0)
            .array_header(HEADER + 0x10, DATA, 1, 1)
            .u16(DATA, 0)
            .build();

        let empty = StringView::read(&reader, HEADER).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_text(&reader).unwrap(), "");

        let nul_only = StringView::read(&reader, HEADER + 0x10).unwrap();
        assert_eq!(nul_only.to_text(&reader).unwrap(), "");
    }
}
