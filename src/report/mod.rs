//! Report module - summarizing split results

pub mod summary;

pub use summary::*;
