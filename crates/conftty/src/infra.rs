//! Infrastructure adapters: catalog files on disk.

pub mod catalog;
