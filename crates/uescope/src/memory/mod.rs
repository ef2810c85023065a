#[cfg(target_os = "windows")]
mod process;
mod reader;
mod value;

#[cfg(test)]
pub mod mock;

#[cfg(target_os = "windows")]
pub use process::{MemoryReader, ProcessHandle};
pub use reader::ReadMemory;
pub use value::{MemValue, align_up, max_align};

#[cfg(test)]
pub use mock::{MockMemoryBuilder, MockMemoryReader};
