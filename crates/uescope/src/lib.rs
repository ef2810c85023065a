//! # uescope
//!
//! Typed read-only views over a running Unreal-engine process's memory.
//!
//! This crate provides:
//! - A `ReadMemory` trait with a Windows process reader behind it
//! - Bounded views over the engine's dynamic arrays and key/value tables,
//!   including the hash-indexed table with chained buckets
//! - Bit-exact replicas of the engine's key-hashing functions
//! - A resolver for the engine's interned-name pool
//! - Declarative field tables projecting engine object types
//!
//! Every view is a transient, zero-cost projection over memory the foreign
//! process owns. Nothing here allocates, frees, or synchronizes with that
//! process; reads are best-effort snapshots, and a lookup that finds nothing
//! is `Ok(None)`, never an error. Base addresses and byte offsets come from
//! external resolution ([`offsets::GlobalOffsets`]) and are assumed correct;
//! a wrong offset reads garbage that this layer cannot detect.

pub mod containers;
pub mod error;
pub mod hash;
pub mod layout;
pub mod memory;
pub mod names;
pub mod objects;
pub mod offsets;
pub mod reflect;
pub mod types;

pub use containers::{ArrayView, HashedEntry, HashedMapView, MapView, StringView};
pub use error::{Error, Result};
pub use hash::{MapKey, PtrKey, combine, int_hash, pointer_hash};
pub use memory::{MemValue, ReadMemory};
#[cfg(target_os = "windows")]
pub use memory::{MemoryReader, ProcessHandle};
pub use names::{NamePool, NameRef};
pub use objects::{ObjectArray, ObjectView};
pub use offsets::{GlobalOffsets, load_offsets, save_offsets};
pub use reflect::{FieldDescriptor, FieldKind, FieldValue, StructLayout, StructView};
pub use types::{Color, LinearColor, Vector2, Vector3, Vector4};
