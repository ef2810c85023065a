//! The foreign process's global object table and per-object helpers.

use tracing::debug;

use crate::error::Result;
use crate::layout::object_array as layout;
use crate::memory::ReadMemory;
use crate::names::{NamePool, NameRef};
use crate::reflect::{StructView, catalog};

/// Outer-chain walks stop after this many hops; a longer chain means the
/// snapshot raced a foreign mutation.
const MAX_OUTER_DEPTH: usize = 16;

/// View over the engine's global chunked object table.
///
/// A process-wide singleton on the foreign side; the handle is built from an
/// externally resolved base address and stays valid for that process's
/// lifetime. Items live in fixed-capacity chunks reached through a
/// chunk-pointer table.
#[derive(Debug, Clone, Copy)]
pub struct ObjectArray {
    base: u64,
}

impl ObjectArray {
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    pub fn num_elements<R: ReadMemory>(&self, reader: &R) -> Result<i32> {
        reader.read_i32(self.base + layout::NUM_ELEMENTS)
    }

    pub fn num_chunks<R: ReadMemory>(&self, reader: &R) -> Result<i32> {
        reader.read_i32(self.base + layout::NUM_CHUNKS)
    }

    /// Address of the object at `index`, or `None` when the index is out of
    /// range or the slot holds no object.
    pub fn object_at<R: ReadMemory>(&self, reader: &R, index: i32) -> Result<Option<u64>> {
        if index < 0 || index >= self.num_elements(reader)? {
            return Ok(None);
        }

        let chunks = reader.read_ptr(self.base + layout::CHUNKS)?;
        if chunks == 0 {
            return Ok(None);
        }

        let chunk_index = index as u64 / layout::ITEMS_PER_CHUNK;
        let within_chunk = index as u64 % layout::ITEMS_PER_CHUNK;
        let chunk = reader.read_ptr(chunks + chunk_index * 8)?;
        if chunk == 0 {
            return Ok(None);
        }

        let item = chunk + within_chunk * layout::ITEM_SIZE;
        let object = reader.read_ptr(item + layout::ITEM_OBJECT)?;
        Ok((object != 0).then_some(object))
    }
}

/// Helpers over the flat object header every engine object begins with.
#[derive(Debug, Clone, Copy)]
pub struct ObjectView {
    pub addr: u64,
}

impl ObjectView {
    pub fn new(addr: u64) -> Self {
        Self { addr }
    }

    fn view(&self) -> StructView {
        StructView::new(self.addr, &catalog::OBJECT)
    }

    pub fn name_ref<R: ReadMemory>(&self, reader: &R) -> Result<NameRef> {
        self.view()
            .read_as(reader, "name_private")
            .map(|n| n.unwrap_or_default())
    }

    pub fn class_ptr<R: ReadMemory>(&self, reader: &R) -> Result<u64> {
        self.view()
            .read_as(reader, "class_private")
            .map(|p| p.unwrap_or(0))
    }

    pub fn outer_ptr<R: ReadMemory>(&self, reader: &R) -> Result<u64> {
        self.view()
            .read_as(reader, "outer_private")
            .map(|p| p.unwrap_or(0))
    }

    /// Resolve the object's own name through the pool.
    pub fn name<R: ReadMemory>(&self, reader: &R, pool: &NamePool) -> Result<String> {
        pool.resolve(reader, self.name_ref(reader)?)
    }

    /// Resolve `Outer.Outer.Name` by walking outer pointers root-first.
    pub fn qualified_name<R: ReadMemory>(&self, reader: &R, pool: &NamePool) -> Result<String> {
        let mut parts = vec![self.name(reader, pool)?];
        let mut outer = self.outer_ptr(reader)?;
        let mut depth = 0usize;

        while outer != 0 {
            if depth >= MAX_OUTER_DEPTH {
                debug!("Outer chain at 0x{:X} exceeded {} hops", self.addr, depth);
                break;
            }
            let view = ObjectView::new(outer);
            parts.push(view.name(reader, pool)?);
            outer = view.outer_ptr(reader)?;
            depth += 1;
        }

        parts.reverse();
        Ok(parts.join("."))
    }
}
