//! Filesystem layer for proj
//!
//! A build file is read once into an owned snapshot and written back once,
//! in full, through a temp-file-then-rename swap.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{PathState, probe, read_text, write_atomic, write_text};
