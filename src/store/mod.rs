// shortcuts-vdf/src/store/mod.rs

pub mod file_io;

// Re-export key items for easier access from `crate::store::`
pub use file_io::{read_document, write_document};
