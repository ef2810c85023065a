//! Linear-scan view over a foreign key/value table without a hash index.

use std::marker::PhantomData;

use crate::error::Result;
use crate::layout::{array as header, map as layout};
use crate::memory::{MemValue, ReadMemory, align_up, max_align};

/// Bounded, unordered key/value table scanned in storage order.
///
/// Entries are laid out as key, value, then an unused 8-byte trailing field
/// the engine build carries. The foreign compiler packs entries naturally:
/// each member starts at a multiple of its own alignment and the stride is
/// rounded to the widest member, so a pointer value after an `i32` key sits
/// at +0x8, not +0x4. On duplicate keys, the first match in append order
/// wins.
#[derive(Debug, Clone, Copy)]
pub struct MapView<K, V> {
    pub elements: u64,
    pub num: i32,
    pub max: i32,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> MemValue for MapView<K, V> {
    const SIZE: usize = header::HEADER_SIZE;
    const ALIGN: usize = 8;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            elements: u64::from_bytes(&bytes[header::DATA as usize..]),
            num: i32::from_bytes(&bytes[header::NUM as usize..]),
            max: i32::from_bytes(&bytes[header::MAX as usize..]),
            _marker: PhantomData,
        }
    }
}

impl<K: MemValue + PartialEq, V: MemValue> MapView<K, V> {
    const VALUE_OFFSET: usize = align_up(K::SIZE, V::ALIGN);
    const ENTRY_ALIGN: usize = max_align(max_align(K::ALIGN, V::ALIGN), 8);
    // The trailing field is pointer-sized and pointer-aligned.
    const ENTRY_SIZE: usize = align_up(
        align_up(Self::VALUE_OFFSET + V::SIZE, 8) + layout::ENTRY_TRAILING_PAD,
        Self::ENTRY_ALIGN,
    );

    /// Read the map header at a foreign address.
    pub fn read<R: ReadMemory>(reader: &R, address: u64) -> Result<Self> {
        reader.read_value(address)
    }

    pub fn len(&self) -> usize {
        self.num.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.num <= 0
    }

    fn entry_addr(&self, index: i32) -> Option<u64> {
        if index < 0 || index >= self.num || self.elements == 0 {
            return None;
        }
        (index as u64)
            .checked_mul(Self::ENTRY_SIZE as u64)
            .and_then(|offset| self.elements.checked_add(offset))
    }

    /// Scan for `key` in storage order and return the first matching value.
    pub fn try_get<R: ReadMemory>(&self, reader: &R, key: &K) -> Result<Option<V>> {
        if self.num <= 0 || self.elements == 0 {
            return Ok(None);
        }
        for index in 0..self.num {
            let Some(addr) = self.entry_addr(index) else {
                return Ok(None);
            };
            let current: K = reader.read_value(addr)?;
            if current == *key {
                return reader.read_value(addr + Self::VALUE_OFFSET as u64).map(Some);
            }
        }
        Ok(None)
    }

    /// Bounds-checked positional access, independent of key value.
    pub fn get_by_index<R: ReadMemory>(&self, reader: &R, index: i32) -> Result<Option<V>> {
        match self.entry_addr(index) {
            Some(addr) => reader.read_value(addr + Self::VALUE_OFFSET as u64).map(Some),
            None => Ok(None),
        }
    }

    /// Read the full entry at `index` for enumeration.
    pub fn entry<R: ReadMemory>(&self, reader: &R, index: i32) -> Result<Option<(K, V)>> {
        let Some(addr) = self.entry_addr(index) else {
            return Ok(None);
        };
        let key = reader.read_value(addr)?;
        let value = reader.read_value(addr + Self::VALUE_OFFSET as u64)?;
        Ok(Some((key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MockMemoryBuilder, MockMemoryReader};

    const HEADER: u64 = 0x1000;
    const ELEMENTS: u64 = 0x2000;

    // i32 key + u32 value + 8-byte pad
    const STRIDE: u64 = 16;

    fn entry(builder: MockMemoryBuilder, index: u64, key: i32, value: u32) -> MockMemoryBuilder {
        let addr = ELEMENTS + index * STRIDE;
        builder
            .i32(addr, key)
            .u32(addr + 4, value)
            .u64(addr + 8, 0)
    }

    fn fixture(num: i32) -> MockMemoryReader {
        let mut builder = MockMemoryBuilder::new().array_header(HEADER, ELEMENTS, num, num);
        for (i, (k, v)) in [(7, 70), (9, 90), (7, 7000)].iter().enumerate() {
            builder = entry(builder, i as u64, *k, *v);
        }
        builder.build()
    }

    #[test]
    fn test_try_get_finds_key() {
        let reader = fixture(3);
        let map = MapView::<i32, u32>::read(&reader, HEADER).unwrap();
        assert_eq!(map.try_get(&reader, &9).unwrap(), Some(90));
        assert_eq!(map.try_get(&reader, &5).unwrap(), None);
    }

    #[test]
    fn test_try_get_first_match_wins_on_duplicates() {
        let reader = fixture(3);
        let map = MapView::<i32, u32>::read(&reader, HEADER).unwrap();
        assert_eq!(map.try_get(&reader, &7).unwrap(), Some(70));
    }

    #[test]
    fn test_get_by_index_bounds() {
        let reader = fixture(3);
        let map = MapView::<i32, u32>::read(&reader, HEADER).unwrap();
        assert_eq!(map.get_by_index(&reader, 1).unwrap(), Some(90));
        assert_eq!(map.get_by_index(&reader, 3).unwrap(), None);
        assert_eq!(map.get_by_index(&reader, -1).unwrap(), None);
    }

    #[test]
    fn test_pointer_values_respect_alignment_padding() {
        // i32 key, u64 value: the value is 8-aligned, so it sits at +0x8
        // behind 4 padding bytes, the trailing field at +0x10, stride 0x18.
        let pad = [0xCCu8; 4];
        let reader = MockMemoryBuilder::new()
            .array_header(HEADER, ELEMENTS, 2, 2)
            .i32(ELEMENTS, 7)
            .bytes(ELEMENTS + 0x4, &pad)
            .u64(ELEMENTS + 0x8, 0xAAAA_0001)
            .u64(ELEMENTS + 0x10, 0)
            .i32(ELEMENTS + 0x18, 9)
            .bytes(ELEMENTS + 0x1C, &pad)
            .u64(ELEMENTS + 0x20, 0xBBBB_0002)
            .u64(ELEMENTS + 0x28, 0)
            .build();

        let map = MapView::<i32, u64>::read(&reader, HEADER).unwrap();
        assert_eq!(map.try_get(&reader, &7).unwrap(), Some(0xAAAA_0001));
        assert_eq!(map.try_get(&reader, &9).unwrap(), Some(0xBBBB_0002));
        assert_eq!(map.entry(&reader, 1).unwrap(), Some((9, 0xBBBB_0002)));
    }

    #[test]
    fn test_empty_map_is_absent_not_error() {
        let reader = MockMemoryBuilder::new()
            .array_header(HEADER, 0, 0, 0)
            .build();
        let map = MapView::<i32, u32>::read(&reader, HEADER).unwrap();
        assert_eq!(map.try_get(&reader, &1).unwrap(), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_entry_enumeration() {
        let reader = fixture(3);
        let map = MapView::<i32, u32>::read(&reader, HEADER).unwrap();
        assert_eq!(map.entry(&reader, 2).unwrap(), Some((7, 7000)));
        assert_eq!(map.entry(&reader, 5).unwrap(), None);
    }
}
