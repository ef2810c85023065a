//! Hash-indexed view over a foreign key/value table with chained buckets.

use std::marker::PhantomData;

use tracing::debug;

use crate::containers::ArrayView;
use crate::error::Result;
use crate::hash::MapKey;
use crate::layout::hashed_map as layout;
use crate::memory::{MemValue, ReadMemory, align_up, max_align};

/// One entry of a hash-indexed table: key, value, and the intra-chain link.
///
/// `hash_next` is the element index of the next entry in the same bucket
/// chain, or [`layout::CHAIN_END`]; `hash_index` is the bucket the entry
/// currently hashes to.
#[derive(Debug, Clone, Copy)]
pub struct HashedEntry<K, V> {
    pub key: K,
    pub value: V,
    pub hash_next: i32,
    pub hash_index: i32,
}

impl<K: MemValue, V: MemValue> HashedEntry<K, V> {
    // Natural packing: the value starts at a multiple of its own alignment,
    // the i32 links follow 4-aligned, and the stride rounds to the widest
    // member.
    const VALUE_OFFSET: usize = align_up(K::SIZE, V::ALIGN);
    const LINKS_OFFSET: usize = align_up(Self::VALUE_OFFSET + V::SIZE, 4);
}

impl<K: MemValue, V: MemValue> MemValue for HashedEntry<K, V> {
    const SIZE: usize = align_up(
        Self::LINKS_OFFSET + layout::ENTRY_LINK_SIZE,
        Self::ALIGN,
    );
    const ALIGN: usize = max_align(max_align(K::ALIGN, V::ALIGN), 4);

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            key: K::from_bytes(bytes),
            value: V::from_bytes(&bytes[Self::VALUE_OFFSET..]),
            hash_next: i32::from_bytes(&bytes[Self::LINKS_OFFSET..]),
            hash_index: i32::from_bytes(&bytes[Self::LINKS_OFFSET + 4..]),
        }
    }
}

/// Hash-indexed key/value table over foreign memory.
///
/// Overlays the sub-fields of a larger foreign structure: `base` is the
/// address of the element-array header, and the bucket-array pointer and
/// bucket count live at fixed byte offsets from it. The engine leaves the
/// bucket array unallocated for small maps; lookups then fall back to a
/// linear scan, which is an ordinary operating mode rather than an error.
///
/// Nothing about the instance is cached between calls: every lookup
/// re-reads the header, bucket pointer, and count, so it observes whatever
/// the foreign process has most recently written.
#[derive(Debug, Clone, Copy)]
pub struct HashedMapView<K, V> {
    base: u64,
    bucket_array_addr: u64,
    bucket_count_addr: u64,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K: MapKey, V: MemValue> HashedMapView<K, V> {
    /// Build a view from the element-array address plus the byte offsets of
    /// the bucket-array-pointer field and the bucket-count field.
    pub fn new(base: u64, bucket_array_offset: u64, bucket_count_offset: u64) -> Self {
        Self {
            base,
            bucket_array_addr: base + bucket_array_offset,
            bucket_count_addr: base + bucket_count_offset,
            _marker: PhantomData,
        }
    }

    /// Current element-array header.
    pub fn elements<R: ReadMemory>(&self, reader: &R) -> Result<ArrayView<HashedEntry<K, V>>> {
        reader.read_value(self.base)
    }

    pub fn len<R: ReadMemory>(&self, reader: &R) -> Result<usize> {
        Ok(self.elements(reader)?.len())
    }

    /// Direct positional access, ignoring hash placement. Used for
    /// full-table enumeration.
    pub fn get_by_index<R: ReadMemory>(&self, reader: &R, index: i32) -> Result<Option<V>> {
        let elements = self.elements(reader)?;
        Ok(elements.get(reader, index)?.map(|entry| entry.value))
    }

    /// Full entry at `index`, for enumeration alongside keys.
    pub fn entry<R: ReadMemory>(
        &self,
        reader: &R,
        index: i32,
    ) -> Result<Option<HashedEntry<K, V>>> {
        self.elements(reader)?.get(reader, index)
    }

    /// Scan all entries in storage order for `key`.
    pub fn try_get_linear<R: ReadMemory>(&self, reader: &R, key: &K) -> Result<Option<V>> {
        let elements = self.elements(reader)?;
        if elements.is_empty() || elements.data == 0 {
            return Ok(None);
        }
        for index in 0..elements.num {
            if let Some(entry) = elements.get(reader, index)? {
                if entry.key == *key {
                    return Ok(Some(entry.value));
                }
            }
        }
        Ok(None)
    }

    /// Look up `key` through the hash index.
    ///
    /// Computes the bucket with the engine's own hash and a power-of-two
    /// bitmask, reads the chain head, and walks `hash_next` links to the
    /// `-1` sentinel. When the bucket array does not exist yet, delegates to
    /// [`Self::try_get_linear`].
    ///
    /// The chain walk is capped at the element count. The foreign process
    /// may rewrite the table mid-walk, so a link can point anywhere; an
    /// out-of-range index or an overlong chain ends the walk as "absent".
    pub fn try_get_by_hash<R: ReadMemory>(&self, reader: &R, key: &K) -> Result<Option<V>> {
        let buckets = reader.read_ptr(self.bucket_array_addr)?;
        if buckets == 0 {
            return self.try_get_linear(reader, key);
        }

        let elements = self.elements(reader)?;
        let bucket_count = reader.read_u32(self.bucket_count_addr)?;
        if bucket_count == 0 {
            return Ok(None);
        }

        let bucket = key.type_hash() & (bucket_count - 1);
        let mut index = reader.read_i32(buckets + bucket as u64 * 4)?;
        let max_steps = elements.len();
        let mut steps = 0usize;

        while index != layout::CHAIN_END {
            if steps >= max_steps {
                debug!(
                    "Bucket {} chain exceeded {} entries at 0x{:X}, giving up",
                    bucket, max_steps, self.base
                );
                return Ok(None);
            }
            let Some(entry) = elements.get(reader, index)? else {
                debug!(
                    "Bucket {} chain index {} out of range at 0x{:X}",
                    bucket, index, self.base
                );
                return Ok(None);
            };
            if entry.key == *key {
                return Ok(Some(entry.value));
            }
            index = entry.hash_next;
            steps += 1;
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::int_hash;
    use crate::memory::{MockMemoryBuilder, MockMemoryReader};

    const BASE: u64 = 0x1000;
    const BUCKET_ARRAY_OFFSET: u64 = 0x10;
    const BUCKET_COUNT_OFFSET: u64 = 0x18;
    const ELEMENTS: u64 = 0x2000;
    const BUCKETS: u64 = 0x3000;

    // i32 key + u32 value + two i32 links
    const STRIDE: u64 = 16;

    fn view() -> HashedMapView<i32, u32> {
        HashedMapView::new(BASE, BUCKET_ARRAY_OFFSET, BUCKET_COUNT_OFFSET)
    }

    fn entry(
        builder: MockMemoryBuilder,
        index: u64,
        key: i32,
        value: u32,
        hash_next: i32,
    ) -> MockMemoryBuilder {
        let addr = ELEMENTS + index * STRIDE;
        let bucket = (int_hash(key) & 3) as i32;
        builder
            .i32(addr, key)
            .u32(addr + 4, value)
            .i32(addr + 8, hash_next)
            .i32(addr + 12, bucket)
    }

    /// Two entries whose integer keys (4 and 8) both mask to bucket 0 of 4:
    /// buckets = [1, -1, -1, -1], entry 1 chains to entry 0.
    fn chained_fixture() -> MockMemoryReader {
        let mut builder = MockMemoryBuilder::new()
            .array_header(BASE, ELEMENTS, 2, 4)
            .u64(BASE + BUCKET_ARRAY_OFFSET, BUCKETS)
            .u32(BASE + BUCKET_COUNT_OFFSET, 4)
            .i32(BUCKETS, 1)
            .i32(BUCKETS + 4, -1)
            .i32(BUCKETS + 8, -1)
            .i32(BUCKETS + 12, -1);
        builder = entry(builder, 0, 4, 400, -1);
        builder = entry(builder, 1, 8, 800, 0);
        builder.build()
    }

    #[test]
    fn test_chain_walk_reaches_both_keys_from_one_bucket() {
        let reader = chained_fixture();
        let map = view();
        // Head of bucket 0 is entry 1; key 4 requires following the chain.
        assert_eq!(map.try_get_by_hash(&reader, &8).unwrap(), Some(800));
        assert_eq!(map.try_get_by_hash(&reader, &4).unwrap(), Some(400));
    }

    #[test]
    fn test_missing_key_exhausts_chain() {
        let reader = chained_fixture();
        let map = view();
        // Key 12 masks to bucket 0 as well, but is not in the chain.
        assert_eq!(map.try_get_by_hash(&reader, &12).unwrap(), None);
        // Key 5 masks to an empty bucket.
        assert_eq!(map.try_get_by_hash(&reader, &5).unwrap(), None);
    }

    #[test]
    fn test_hashed_and_linear_paths_agree() {
        let reader = chained_fixture();
        let map = view();
        for key in [4, 8, 12, 5, -1] {
            assert_eq!(
                map.try_get_by_hash(&reader, &key).unwrap(),
                map.try_get_linear(&reader, &key).unwrap(),
                "paths disagree for key {}",
                key
            );
        }
    }

    #[test]
    fn test_pointer_values_respect_alignment_padding() {
        // i32 key, u64 value: value at +0x8 behind padding, links at +0x10,
        // stride 0x18. Keys 4 and 5 mask to buckets 0 and 1 of 4.
        assert_eq!(<HashedEntry<i32, u64> as MemValue>::SIZE, 0x18);

        let pad = [0xCCu8; 4];
        let reader = MockMemoryBuilder::new()
            .array_header(BASE, ELEMENTS, 2, 4)
            .u64(BASE + BUCKET_ARRAY_OFFSET, BUCKETS)
            .u32(BASE + BUCKET_COUNT_OFFSET, 4)
            .i32(BUCKETS, 0)
            .i32(BUCKETS + 4, 1)
            .i32(BUCKETS + 8, -1)
            .i32(BUCKETS + 12, -1)
            .i32(ELEMENTS, 4)
            .bytes(ELEMENTS + 0x4, &pad)
            .u64(ELEMENTS + 0x8, 0xAAAA_0001)
            .i32(ELEMENTS + 0x10, -1)
            .i32(ELEMENTS + 0x14, 0)
            .i32(ELEMENTS + 0x18, 5)
            .bytes(ELEMENTS + 0x1C, &pad)
            .u64(ELEMENTS + 0x20, 0xBBBB_0002)
            .i32(ELEMENTS + 0x28, -1)
            .i32(ELEMENTS + 0x2C, 1)
            .build();

        let map: HashedMapView<i32, u64> =
            HashedMapView::new(BASE, BUCKET_ARRAY_OFFSET, BUCKET_COUNT_OFFSET);
        assert_eq!(map.try_get_by_hash(&reader, &4).unwrap(), Some(0xAAAA_0001));
        assert_eq!(map.try_get_by_hash(&reader, &5).unwrap(), Some(0xBBBB_0002));
        assert_eq!(map.try_get_linear(&reader, &4).unwrap(), Some(0xAAAA_0001));
    }

    #[test]
    fn test_null_bucket_array_falls_back_to_linear() {
        let mut builder = MockMemoryBuilder::new()
            .array_header(BASE, ELEMENTS, 1, 1)
            .u64(BASE + BUCKET_ARRAY_OFFSET, 0)
            .u32(BASE + BUCKET_COUNT_OFFSET, 0);
        builder = entry(builder, 0, 4, 400, -1);
        let reader = builder.build();

        let map = view();
        assert_eq!(map.try_get_by_hash(&reader, &4).unwrap(), Some(400));
        assert_eq!(map.try_get_by_hash(&reader, &8).unwrap(), None);
    }

    #[test]
    fn test_corrupt_self_looping_chain_terminates() {
        // Entry 0 links back to itself; the step cap must end the walk.
        let mut builder = MockMemoryBuilder::new()
            .array_header(BASE, ELEMENTS, 1, 1)
            .u64(BASE + BUCKET_ARRAY_OFFSET, BUCKETS)
            .u32(BASE + BUCKET_COUNT_OFFSET, 4)
            .i32(BUCKETS, 0)
            .i32(BUCKETS + 4, -1)
            .i32(BUCKETS + 8, -1)
            .i32(BUCKETS + 12, -1);
        builder = entry(builder, 0, 4, 400, 0);
        let reader = builder.build();

        let map = view();
        // Key 8 masks to bucket 0; the chain loops on entry 0 forever.
        assert_eq!(map.try_get_by_hash(&reader, &8).unwrap(), None);
    }

    #[test]
    fn test_corrupt_out_of_range_chain_index_is_absent() {
        let mut builder = MockMemoryBuilder::new()
            .array_header(BASE, ELEMENTS, 1, 1)
            .u64(BASE + BUCKET_ARRAY_OFFSET, BUCKETS)
            .u32(BASE + BUCKET_COUNT_OFFSET, 4)
            .i32(BUCKETS, 7) // past the single element
            .i32(BUCKETS + 4, -1)
            .i32(BUCKETS + 8, -1)
            .i32(BUCKETS + 12, -1);
        builder = entry(builder, 0, 4, 400, -1);
        let reader = builder.build();

        let map = view();
        assert_eq!(map.try_get_by_hash(&reader, &4).unwrap(), None);
    }

    #[test]
    fn test_get_by_index_enumeration() {
        let reader = chained_fixture();
        let map = view();
        assert_eq!(map.get_by_index(&reader, 0).unwrap(), Some(400));
        assert_eq!(map.get_by_index(&reader, 1).unwrap(), Some(800));
        assert_eq!(map.get_by_index(&reader, 2).unwrap(), None);
        assert_eq!(map.len(&reader).unwrap(), 2);
    }
}
