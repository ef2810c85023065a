use crate::error::Result;
use crate::memory::MemValue;

/// Read access to a foreign process's address space.
///
/// Every view in this crate is generic over a `ReadMemory` implementation,
/// so the same code runs against a live process and against mock byte images
/// in tests. Reads are best-effort, non-atomic snapshots; the foreign process
/// may be mutating the same memory concurrently and nothing here can detect
/// that.
pub trait ReadMemory {
    /// Read `size` raw bytes starting at `address`.
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    /// Base address of the foreign main module.
    fn base_address(&self) -> u64;

    /// Read a fixed-size value at `address`.
    fn read_value<T: MemValue>(&self, address: u64) -> Result<T> {
        let bytes = self.read_bytes(address, T::SIZE)?;
        Ok(T::from_bytes(&bytes))
    }

    fn read_u8(&self, address: u64) -> Result<u8> {
        self.read_value(address)
    }

    fn read_u16(&self, address: u64) -> Result<u16> {
        self.read_value(address)
    }

    fn read_u32(&self, address: u64) -> Result<u32> {
        self.read_value(address)
    }

    fn read_u64(&self, address: u64) -> Result<u64> {
        self.read_value(address)
    }

    fn read_i32(&self, address: u64) -> Result<i32> {
        self.read_value(address)
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        self.read_value(address)
    }

    /// Read a foreign pointer (64-bit).
    fn read_ptr(&self, address: u64) -> Result<u64> {
        self.read_value(address)
    }
}
