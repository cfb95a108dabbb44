//! Incremental Markdown block segmentation with a per-block parse cache.
//!
//! [`segment`] splits a document into top-level blocks on blank lines while never splitting
//! inside fenced code, HTML comments, open HTML elements, or tables. [`ParseCache`] memoizes the
//! parse result of each block by its exact text, and [`IncrementalDocument`] wires both together
//! so that a streamed or edited document only re-parses the blocks that changed.

pub mod cache;
pub mod document;
pub mod error;
pub mod options;
pub mod scan;
pub mod segment;
mod syntax;
pub mod types;

#[cfg(feature = "pulldown")]
pub mod adapters;

pub use cache::*;
pub use document::*;
pub use error::*;
pub use options::*;
pub use scan::*;
pub use segment::*;
pub use types::*;
