//! Re-exports of the shared utility functions used across the crate.

pub use dotmatrix_common::util::{capitalize, read_file, replace_ext, timestamp, write_file};
