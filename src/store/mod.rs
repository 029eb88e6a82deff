//! Store Module
//!
//! Flat-file persistence for the item collection.

mod file;

pub use file::FileStore;
