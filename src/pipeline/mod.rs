//! Pipeline module - the three split steps: load, split, save

pub mod loader;
pub mod splitter;
pub mod writer;

pub use loader::*;
pub use splitter::*;
pub use writer::*;
