//! Mock memory reader for tests.
//!
//! Builds a sparse byte image at arbitrary fake addresses so container and
//! pool logic can be exercised without a live process.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

#[derive(Debug, Default)]
pub struct MockMemoryReader {
    bytes: BTreeMap<u64, u8>,
    base_address: u64,
}

impl ReadMemory for MockMemoryReader {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(size);
        for offset in 0..size as u64 {
            match self.bytes.get(&(address + offset)) {
                Some(b) => out.push(*b),
                None => {
                    return Err(Error::read_failed(
                        address,
                        format!("unmapped mock address {:#x}", address + offset),
                    ));
                }
            }
        }
        Ok(out)
    }

    fn base_address(&self) -> u64 {
        self.base_address
    }
}

#[derive(Debug, Default)]
pub struct MockMemoryBuilder {
    bytes: BTreeMap<u64, u8>,
    base_address: u64,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_address(mut self, address: u64) -> Self {
        self.base_address = address;
        self
    }

    pub fn bytes(mut self, address: u64, data: &[u8]) -> Self {
        for (i, b) in data.iter().enumerate() {
            self.bytes.insert(address + i as u64, *b);
        }
        self
    }

    pub fn u16(self, address: u64, value: u16) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn u32(self, address: u64, value: u32) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn u64(self, address: u64, value: u64) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn i32(self, address: u64, value: i32) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    /// Lay out a 16-byte dynamic-array header: data pointer, count, capacity.
    pub fn array_header(self, address: u64, data: u64, num: i32, max: i32) -> Self {
        self.u64(address, data).i32(address + 8, num).i32(address + 12, max)
    }

    pub fn build(self) -> MockMemoryReader {
        MockMemoryReader {
            bytes: self.bytes,
            base_address: self.base_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_mapped_bytes() {
        let reader = MockMemoryBuilder::new()
            .u32(0x1000, 0xDEAD_BEEF)
            .build();
        assert_eq!(reader.read_u32(0x1000).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_unmapped_read_fails() {
        let reader = MockMemoryBuilder::new().u32(0x1000, 1).build();
        // Overlaps the mapped word but runs past its end.
        assert!(reader.read_bytes(0x1002, 4).is_err());
        assert!(reader.read_u32(0x2000).is_err());
    }
}
