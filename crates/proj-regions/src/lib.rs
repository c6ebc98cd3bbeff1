//! Managed-region parsing and generation for proj.
//!
//! A build file is treated as opaque text interleaved with named, nestable
//! regions delimited by sentinel lines:
//!
//! ```text
//! # --== proj begin sources ==--
//! main.cpp
//! # --== proj end sources ==--
//! ```
//!
//! [`Document::parse`] produces a lossless chunk tree and
//! [`Document::generate`] is its exact inverse, so any text that is not
//! mutated comes back byte-for-byte.
//!
//! ```
//! use proj_regions::Document;
//!
//! let text = "head\n# --== proj begin sources ==--\na.cpp\n# --== proj end sources ==--\n";
//! let doc = Document::parse(text).unwrap();
//! assert_eq!(doc.region("sources").unwrap().text_lines(), vec!["a.cpp"]);
//! assert_eq!(doc.generate(), text);
//! ```

pub mod chunk;
pub mod document;
pub mod error;
pub mod lines;
pub mod locator;
pub mod parser;
pub mod writer;

pub use chunk::{Chunk, Region};
pub use document::Document;
pub use error::{Error, Result};
pub use lines::Entry;
pub use locator::{RegionPath, locate};
pub use parser::{is_sentinel, parse};
pub use writer::{begin_marker, end_marker, generate};
