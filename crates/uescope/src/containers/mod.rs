mod array;
mod hashed_map;
mod map;
mod string;

pub use array::*;
pub use hashed_map::*;
pub use map::*;
pub use string::*;
