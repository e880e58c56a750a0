//! File-backed storage primitives for the seen-record store

mod io;
mod paths;

pub use io::{atomic_write, read_json_array, ArrayFile};
pub use paths::Paths;
