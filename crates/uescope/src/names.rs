//! Interned-name references and the chunked pool that resolves them.

use encoding_rs::{UTF_16LE, WINDOWS_1252};

use crate::error::Result;
use crate::hash::MapKey;
use crate::layout::name_pool as layout;
use crate::memory::{MemValue, ReadMemory};

/// Compact reference to an interned string.
///
/// The engine stores every distinct string once; all occurrences share one
/// reference. `pool_location` packs a chunk index (high 16 bits) and a slot
/// offset in 2-byte units (low 16 bits); `number` disambiguates `Name_3`
/// style instance suffixes and does not participate in equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRef {
    pub pool_location: u32,
    pub number: u32,
}

impl NameRef {
    pub fn new(pool_location: u32, number: u32) -> Self {
        Self {
            pool_location,
            number,
        }
    }

    pub fn chunk_index(&self) -> u32 {
        self.pool_location >> 16
    }

    pub fn slot_offset(&self) -> u32 {
        self.pool_location & 0xFFFF
    }

    pub fn is_none(&self) -> bool {
        self.pool_location == 0
    }
}

/// Equality compares the raw reference, not resolved text.
impl PartialEq for NameRef {
    fn eq(&self, other: &Self) -> bool {
        self.pool_location == other.pool_location
    }
}

impl Eq for NameRef {}

impl MemValue for NameRef {
    const SIZE: usize = 8;
    const ALIGN: usize = 4;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            pool_location: u32::from_bytes(bytes),
            number: u32::from_bytes(&bytes[4..]),
        }
    }
}

impl MapKey for NameRef {
    /// The engine's hash polynomial over chunk index, slot offset, and
    /// instance number.
    fn type_hash(&self) -> u32 {
        let chunk = self.chunk_index();
        let slot = self.slot_offset();
        (chunk << 19)
            .wrapping_add(chunk)
            .wrapping_add(slot << 16)
            .wrapping_add(slot)
            .wrapping_add(slot >> 4)
            .wrapping_add(self.number)
    }
}

/// Resolver over the foreign process's interned-name pool.
///
/// The pool is a singleton in the foreign process; the handle is built from
/// an externally resolved base address and stays valid for that process's
/// lifetime. Resolution is side-effect-free and uncached: every call
/// re-walks the pool.
#[derive(Debug, Clone, Copy)]
pub struct NamePool {
    base: u64,
}

impl NamePool {
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    pub fn chunk_count<R: ReadMemory>(&self, reader: &R) -> Result<u32> {
        reader.read_u32(self.base + layout::CHUNK_COUNT)
    }

    pub fn name_count<R: ReadMemory>(&self, reader: &R) -> Result<u32> {
        reader.read_u32(self.base + layout::NAME_COUNT)
    }

    /// Base address of a pool chunk, from the table following the header.
    pub fn chunk<R: ReadMemory>(&self, reader: &R, chunk_index: u32) -> Result<u64> {
        reader.read_ptr(self.base + layout::CHUNK_TABLE + chunk_index as u64 * 8)
    }

    /// Resolve a name reference to its text.
    pub fn resolve<R: ReadMemory>(&self, reader: &R, name: NameRef) -> Result<String> {
        self.resolve_location(reader, name.pool_location)
    }

    /// Resolve a raw packed pool location to its text.
    ///
    /// Each slot starts with a 16-bit packed header (wide flag, probe hash,
    /// length) followed immediately by the characters.
    pub fn resolve_location<R: ReadMemory>(&self, reader: &R, pool_location: u32) -> Result<String> {
        let chunk = self.chunk(reader, pool_location >> 16)?;
        let slot = chunk + (pool_location & 0xFFFF) as u64 * layout::SLOT_STRIDE;

        let header = reader.read_u16(slot)?;
        let wide = header & layout::WIDE_FLAG != 0;
        let length = (header >> layout::LENGTH_SHIFT) as usize;
        if length == 0 {
            return Ok(String::new());
        }

        let text_addr = slot + 2;
        if wide {
            let bytes = reader.read_bytes(text_addr, length * 2)?;
            let (decoded, _, _) = UTF_16LE.decode(&bytes);
            Ok(decoded.into_owned())
        } else {
            let bytes = reader.read_bytes(text_addr, length)?;
            let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}
