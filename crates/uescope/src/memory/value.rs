//! Little-endian decoding of fixed-size foreign values.

/// A value with a fixed binary size that can be decoded from foreign memory.
///
/// Implementations must consume exactly `SIZE` little-endian bytes. The
/// decoded value is a copy; it carries no connection to the memory it came
/// from.
pub trait MemValue: Sized {
    /// Size of the value in foreign memory, in bytes.
    const SIZE: usize;

    /// Alignment the foreign compiler gives the value. Composite layouts
    /// (map entries) place each member at a multiple of its alignment and
    /// round the stride to the widest member.
    const ALIGN: usize;

    /// Decode from a buffer of at least `SIZE` bytes.
    fn from_bytes(bytes: &[u8]) -> Self;
}

/// Round `offset` up to a power-of-two `align`.
pub const fn align_up(offset: usize, align: usize) -> usize {
    (offset + align - 1) & !(align - 1)
}

pub const fn max_align(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

macro_rules! scalar_mem_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MemValue for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
                const ALIGN: usize = std::mem::align_of::<$ty>();

                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(buf)
                }
            }
        )*
    };
}

scalar_mem_value!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl MemValue for bool {
    const SIZE: usize = 1;
    const ALIGN: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}
