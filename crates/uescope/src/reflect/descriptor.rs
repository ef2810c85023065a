use strum::Display;

use crate::containers::{ArrayView, StringView};
use crate::error::Result;
use crate::memory::{MemValue, ReadMemory};
use crate::names::NameRef;
use crate::types::{Color, LinearColor, Vector2, Vector3, Vector4};

/// Semantic type of a projected field.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    /// Foreign pointer, returned as a raw address.
    Ptr,
    /// Interned-name reference.
    Name,
    /// Dynamic-array header; the caller picks the element interpretation.
    Array,
    /// Heap UTF-16 string with a NUL included in the count.
    String,
    Vector2,
    Vector3,
    Vector4,
    Color,
    LinearColor,
    /// Nested struct projected in place.
    Struct(&'static StructLayout),
}

/// One named field at a fixed byte offset.
#[derive(Debug, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: u64,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, offset: u64, kind: FieldKind) -> Self {
        Self { name, offset, kind }
    }
}

/// Fixed-size layout of one foreign type: total size plus its field table.
#[derive(Debug, PartialEq)]
pub struct StructLayout {
    pub name: &'static str,
    pub size: u64,
    pub fields: &'static [FieldDescriptor],
}

impl StructLayout {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field read through [`StructView::read_field`].
#[derive(Debug, Clone, Copy)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Ptr(u64),
    Name(NameRef),
    /// Header only; call [`ArrayView::cast`] with the element type the
    /// caller knows to be correct.
    Array(ArrayView<u8>),
    /// Header only; resolve with [`StringView::to_text`].
    String(StringView),
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
    Color(Color),
    LinearColor(LinearColor),
    Struct(StructView),
}

/// A foreign object projected through a layout table.
///
/// Reading a field reinterprets `base + offset` as the field's semantic
/// type. Nothing validates that the layout matches the bytes; stale or
/// wrong offsets read garbage, which this layer cannot detect.
#[derive(Debug, Clone, Copy)]
pub struct StructView {
    pub base: u64,
    pub layout: &'static StructLayout,
}

impl StructView {
    pub fn new(base: u64, layout: &'static StructLayout) -> Self {
        Self { base, layout }
    }

    /// Absolute address of a named field, or `None` for an unknown name.
    pub fn field_addr(&self, name: &str) -> Option<u64> {
        self.layout.field(name).map(|f| self.base + f.offset)
    }

    /// Read a named field as a caller-chosen value type.
    ///
    /// The caller's `T` overrides the descriptor's kind; this is the escape
    /// hatch for fields whose inline-vs-pointer representation the table
    /// cannot express.
    pub fn read_as<T: MemValue, R: ReadMemory>(
        &self,
        reader: &R,
        name: &str,
    ) -> Result<Option<T>> {
        match self.field_addr(name) {
            Some(addr) => reader.read_value(addr).map(Some),
            None => Ok(None),
        }
    }

    /// Read a named field as its declared semantic type.
    pub fn read_field<R: ReadMemory>(&self, reader: &R, name: &str) -> Result<Option<FieldValue>> {
        let Some(descriptor) = self.layout.field(name) else {
            return Ok(None);
        };
        let addr = self.base + descriptor.offset;
        let value = match descriptor.kind {
            FieldKind::U8 => FieldValue::U8(reader.read_value(addr)?),
            FieldKind::U16 => FieldValue::U16(reader.read_value(addr)?),
            FieldKind::U32 => FieldValue::U32(reader.read_value(addr)?),
            FieldKind::U64 => FieldValue::U64(reader.read_value(addr)?),
            FieldKind::I8 => FieldValue::I8(reader.read_value(addr)?),
            FieldKind::I16 => FieldValue::I16(reader.read_value(addr)?),
            FieldKind::I32 => FieldValue::I32(reader.read_value(addr)?),
            FieldKind::I64 => FieldValue::I64(reader.read_value(addr)?),
            FieldKind::F32 => FieldValue::F32(reader.read_value(addr)?),
            FieldKind::F64 => FieldValue::F64(reader.read_value(addr)?),
            FieldKind::Bool => FieldValue::Bool(reader.read_value(addr)?),
            FieldKind::Ptr => FieldValue::Ptr(reader.read_ptr(addr)?),
            FieldKind::Name => FieldValue::Name(reader.read_value(addr)?),
            FieldKind::Array => FieldValue::Array(reader.read_value(addr)?),
            FieldKind::String => FieldValue::String(reader.read_value(addr)?),
            FieldKind::Vector2 => FieldValue::Vector2(reader.read_value(addr)?),
            FieldKind::Vector3 => FieldValue::Vector3(reader.read_value(addr)?),
            FieldKind::Vector4 => FieldValue::Vector4(reader.read_value(addr)?),
            FieldKind::Color => FieldValue::Color(reader.read_value(addr)?),
            FieldKind::LinearColor => FieldValue::LinearColor(reader.read_value(addr)?),
            FieldKind::Struct(layout) => FieldValue::Struct(StructView::new(addr, layout)),
        };
        Ok(Some(value))
    }
}
