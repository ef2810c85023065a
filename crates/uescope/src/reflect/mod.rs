//! Declarative projection of foreign object types.
//!
//! Each foreign type is described by a flat table of named field offsets.
//! Types the engine models via inheritance exist in memory as one contiguous
//! blob, so a "derived" table repeats every base field at the identical
//! absolute offset instead of referencing a base table.

pub mod catalog;
mod descriptor;

pub use descriptor::*;
