//! Bit-exact replicas of the engine's key-hashing functions.
//!
//! Hashed-map lookups only work if these produce the exact bucket the engine
//! itself placed an entry in. Any deviation in a shift amount or wraparound
//! does not crash; it silently misses entries. All arithmetic is unsigned
//! 32-bit with wraparound.

use crate::memory::MemValue;

/// Odd constant derived from the golden ratio, the engine's mixing seed.
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Hash a foreign pointer.
///
/// The low 4 alignment bits are discarded, the address is truncated to 32
/// bits, and the result is run through the engine's eight-round
/// subtract/xor/shift mix.
pub fn pointer_hash(addr: u64) -> u32 {
    let i = (addr >> 4) as u32;
    let mut a = GOLDEN_RATIO.wrapping_sub(i) ^ (i << 8);
    let mut b = a.wrapping_add(i).wrapping_neg() ^ (a >> 13);
    let mut c = i.wrapping_sub(a).wrapping_sub(b) ^ (b >> 12);
    a = a.wrapping_sub(c).wrapping_sub(b) ^ (c << 16);
    b = b.wrapping_sub(a).wrapping_sub(c) ^ (a >> 5);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 3);
    a = a.wrapping_sub(c).wrapping_sub(b) ^ (c << 10);
    b.wrapping_sub(a).wrapping_sub(c) ^ (a >> 15)
}

/// Hash an integer key. The engine uses the value itself.
pub fn int_hash(value: i32) -> u32 {
    value as u32
}

/// Combine two hashes with the engine's seeded eight-round mix.
///
/// Order-sensitive: `combine(a, b)` and `combine(b, a)` differ in general.
pub fn combine(a: u32, b: u32) -> u32 {
    let mut x = a.wrapping_sub(b) ^ (b >> 13);
    let mut y = GOLDEN_RATIO.wrapping_sub(x).wrapping_sub(b) ^ (x << 8);
    let mut z = b.wrapping_sub(y).wrapping_sub(x) ^ (y >> 13);
    x = x.wrapping_sub(y).wrapping_sub(z) ^ (z >> 12);
    y = y.wrapping_sub(x).wrapping_sub(z) ^ (x << 16);
    z = z.wrapping_sub(y).wrapping_sub(x) ^ (y >> 5);
    x = x.wrapping_sub(y).wrapping_sub(z) ^ (z >> 3);
    y = y.wrapping_sub(x).wrapping_sub(z) ^ (x << 10);
    z.wrapping_sub(y).wrapping_sub(x) ^ (y >> 15)
}

/// A key type usable in a hash-indexed map view.
///
/// `type_hash` must match the engine's own hash for the key, and equality
/// must match the engine's key comparison.
pub trait MapKey: MemValue + PartialEq {
    fn type_hash(&self) -> u32;
}

/// A foreign pointer used as a map key. Equality is raw address equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtrKey(pub u64);

impl MemValue for PtrKey {
    const SIZE: usize = 8;
    const ALIGN: usize = 8;

    fn from_bytes(bytes: &[u8]) -> Self {
        PtrKey(u64::from_bytes(bytes))
    }
}

impl MapKey for PtrKey {
    fn type_hash(&self) -> u32 {
        pointer_hash(self.0)
    }
}

impl MapKey for i32 {
    fn type_hash(&self) -> u32 {
        int_hash(*self)
    }
}
