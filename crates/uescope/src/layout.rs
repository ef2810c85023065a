//! Memory layout constants for the foreign engine's container internals.
//!
//! These describe one engine build's binary layout and must be re-verified
//! against any other build. Object-type field tables live in
//! [`crate::reflect::catalog`]; this module covers the container and pool
//! headers the views walk directly.

/// Dynamic-array header (`TArray`): data pointer, count, capacity.
pub mod array {
    pub const DATA: u64 = 0x0;
    pub const NUM: u64 = 0x8;
    pub const MAX: u64 = 0xC;
    pub const HEADER_SIZE: usize = 0x10;
}

/// Linear map entries: key, value, then one unused 8-byte field observed in
/// the engine layout. Kept so the entry stride matches foreign memory.
pub mod map {
    pub const ENTRY_TRAILING_PAD: usize = 0x8;
}

/// Hash-indexed map entries: key, value, chain link, bucket index.
pub mod hashed_map {
    /// `hash_next` (i32) and `hash_index` (i32) trailing the key/value pair.
    pub const ENTRY_LINK_SIZE: usize = 0x8;

    /// Chain-terminator sentinel in bucket heads and `hash_next` links.
    pub const CHAIN_END: i32 = -1;
}

/// Interned-name pool header and slot encoding.
pub mod name_pool {
    pub const CHUNK_COUNT: u64 = 0x8;
    pub const NAME_COUNT: u64 = 0xC;
    /// Chunk-pointer table starts immediately after the 0x10-byte header.
    pub const CHUNK_TABLE: u64 = 0x10;

    /// Slots are addressed in 2-byte units within a chunk.
    pub const SLOT_STRIDE: u64 = 0x2;

    // 16-bit packed slot header: bit 0 wide flag, bits 1-5 probe hash,
    // bits 6-15 length in characters.
    pub const WIDE_FLAG: u16 = 0x1;
    pub const LENGTH_SHIFT: u16 = 6;
}

/// Global object table (`FUObjectArray`): a chunked table of 24-byte items.
pub mod object_array {
    pub const CHUNKS: u64 = 0x10;
    pub const NUM_ELEMENTS: u64 = 0x24;
    pub const NUM_CHUNKS: u64 = 0x2C;

    pub const ITEMS_PER_CHUNK: u64 = 0x10000;
    pub const ITEM_SIZE: u64 = 0x18;
    /// Object pointer at the start of each item; internal flags follow.
    pub const ITEM_OBJECT: u64 = 0x0;
}
