//! Externally resolved addresses of the foreign process's global structures.
//!
//! How these addresses are found (signature scanning, symbol dumps, manual
//! analysis) is someone else's job; this crate treats them as opaque
//! configuration tied to one engine build.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOffsets {
    /// Engine build these addresses were resolved against.
    pub version: String,
    pub name_pool: u64,
    pub object_array: u64,
    pub engine: u64,
    pub world: u64,
}

impl GlobalOffsets {
    pub fn is_valid(&self) -> bool {
        !self.version.is_empty() && self.name_pool != 0 && self.object_array != 0
    }
}

pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<GlobalOffsets> {
    let content = fs::read_to_string(&path)?;
    let offsets = serde_json::from_str(&content)?;
    Ok(offsets)
}

pub fn save_offsets<P: AsRef<Path>>(path: P, offsets: &GlobalOffsets) -> Result<()> {
    let content = serde_json::to_string_pretty(offsets)?;
    fs::write(path, content)?;
    Ok(())
}
