//! Bounded view over a foreign dynamic array.

use std::marker::PhantomData;

use crate::error::Result;
use crate::layout::array as layout;
use crate::memory::{MemValue, ReadMemory};

/// Non-owning view over a contiguous foreign array.
///
/// Decoded from a 16-byte header: data pointer, element count, capacity.
/// The view is a transient projection; it holds no memory and stays valid
/// only as long as the foreign allocation is neither freed nor relocated,
/// which cannot be checked from here.
///
/// `T` is the caller's choice of element interpretation. For arrays whose
/// elements are pointers to the real values, use [`ArrayView::get_indirect`]
/// instead of parameterizing on the pointee; the two representations cannot
/// be told apart by reading memory, and picking the wrong accessor reads
/// garbage.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<T> {
    pub data: u64,
    pub num: i32,
    pub max: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemValue for ArrayView<T> {
    const SIZE: usize = layout::HEADER_SIZE;
    const ALIGN: usize = 8;

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: u64::from_bytes(&bytes[layout::DATA as usize..]),
            num: i32::from_bytes(&bytes[layout::NUM as usize..]),
            max: i32::from_bytes(&bytes[layout::MAX as usize..]),
            _marker: PhantomData,
        }
    }
}

impl<T: MemValue> ArrayView<T> {
    /// Read the array header at a foreign address.
    pub fn read<R: ReadMemory>(reader: &R, address: u64) -> Result<Self> {
        reader.read_value(address)
    }

    pub fn len(&self) -> usize {
        self.num.max(0) as usize
    }

    pub fn capacity(&self) -> usize {
        self.max.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.num <= 0
    }

    /// Address of the element at `index`, or `None` outside `[0, num)`.
    ///
    /// This is the borrowed-reference analog for an out-of-process reader:
    /// an address the caller may resolve now but must not keep across a
    /// foreign reallocation.
    pub fn element_addr(&self, index: i32) -> Option<u64> {
        if index < 0 || index >= self.num {
            return None;
        }
        // A racy read can leave a garbage data pointer near the end of the
        // address space; a wrapped address is absent, not a panic.
        (index as u64)
            .checked_mul(T::SIZE as u64)
            .and_then(|offset| self.data.checked_add(offset))
    }

    /// Read the inline element at `index`.
    pub fn get<R: ReadMemory>(&self, reader: &R, index: i32) -> Result<Option<T>> {
        match self.element_addr(index) {
            Some(addr) => reader.read_value(addr).map(Some),
            None => Ok(None),
        }
    }

    /// Treat the element at `index` as a pointer to `V` and dereference it.
    ///
    /// Null element pointers yield `None`; they are routine in engine arrays.
    pub fn get_indirect<V: MemValue, R: ReadMemory>(
        &self,
        reader: &R,
        index: i32,
    ) -> Result<Option<V>> {
        let Some(slot) = self.element_addr(index) else {
            return Ok(None);
        };
        let target = reader.read_ptr(slot)?;
        if target == 0 {
            return Ok(None);
        }
        reader.read_value(target).map(Some)
    }

    /// Reinterpret the same header with a different element type.
    pub fn cast<U: MemValue>(self) -> ArrayView<U> {
        ArrayView {
            data: self.data,
            num: self.num,
            max: self.max,
            _marker: PhantomData,
        }
    }
}
