//! File-based repository implementations.

mod save_file;

pub use save_file::FlatFileSave;
