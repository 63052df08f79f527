//! The pinned ABI facts the shim depends on.
//!
//! `catalog` defines what a fact is; `table` holds the one canonical list.

pub mod catalog;
pub mod table;
