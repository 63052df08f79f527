//! C-ABI query surface over the shim's layout facts.
//!
//! External tooling loads this library (natively or as a wasm32 WASI
//! reactor) and calls these symbols instead of parsing verifier output.
//! Every answer comes from the same `LivePlatform` queries the verifier
//! uses, so the two can never disagree on a fact.
//!
//! None of these functions can fail.

pub mod capability;

use shimabi_core::facts::catalog::Query;
use shimabi_core::platform::{LivePlatform, Platform};

fn layout(query: Query) -> usize {
    // Size and offset queries are built from `usize` values.
    LivePlatform.resolve(query) as usize
}

/// Size of `struct timespec *`.
#[unsafe(no_mangle)]
pub extern "C" fn size_of_timespec_pointer() -> usize {
    layout(Query::SizeOfTimespecPtr)
}

/// Offset of `tv_sec` within `struct timespec`.
#[unsafe(no_mangle)]
pub extern "C" fn offset_of_timespec_seconds_field() -> usize {
    layout(Query::OffsetOfTimespecSec)
}

/// Offset of `tv_nsec` within `struct timespec`.
#[unsafe(no_mangle)]
pub extern "C" fn offset_of_timespec_nanoseconds_field() -> usize {
    layout(Query::OffsetOfTimespecNsec)
}

#[unsafe(no_mangle)]
pub extern "C" fn size_of_stat_structure() -> usize {
    layout(Query::SizeOfStat)
}

/// Call every primitive the shim links against once. See [`capability`].
#[unsafe(no_mangle)]
pub extern "C" fn exercise_platform_primitives() {
    capability::exercise();
}
