//! Plain text file helpers: read or write a whole file as one string or as a list of lines.
//!
//! All text is UTF-8. Writes replace the target file entirely; reads of a missing file
//! return empty results.

pub mod config;
pub mod error;
pub mod store;

pub use error::{Action, Error, Result};
pub use store::text_file_store::{read_all, read_lines, write_all, write_lines};
