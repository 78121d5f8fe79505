//! File staging primitives used by the pipeline stages

mod staging;

pub use staging::{copy_matching, copy_tree, is_populated, move_replace, remove_tree};
