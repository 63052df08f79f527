//! Host-surface audit of compiled WebAssembly modules.
//!
//! The shim instantiates modules as WASI reactors. It registers every
//! `wasi_snapshot_preview1` name, though only some are implemented and the
//! rest fail when called, plus a few `env` identity functions. An import
//! outside that surface fails at instantiation time; this audit finds it
//! ahead of time and separately lists imports that would link to a stub.

pub mod audit;
pub mod parse;
pub mod read;
pub mod surface;
