//! Ground truth for fact queries.
//!
//! `Platform` is the seam between the verifier and the environment it runs
//! in. `LivePlatform` answers from the compiled target's own type system and
//! libc constants; tests substitute fixed answers.

use std::mem::{offset_of, size_of};

use serde::{Deserialize, Serialize};

use crate::facts::catalog::Query;

pub trait Platform {
    /// Resolve `query` to the value the platform actually reports.
    fn resolve(&self, query: Query) -> i64;
}

/// The platform this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct LivePlatform;

fn width(bytes: usize) -> i64 {
    bytes as i64
}

impl Platform for LivePlatform {
    fn resolve(&self, query: Query) -> i64 {
        match query {
            Query::SizeOfTimeT => width(size_of::<libc::time_t>()),
            Query::SizeOfLong => width(size_of::<libc::c_long>()),
            Query::SizeOfTimespec => width(size_of::<libc::timespec>()),
            Query::SizeOfPollfd => width(size_of::<libc::pollfd>()),
            Query::SizeOfStat => width(size_of::<libc::stat>()),
            Query::SizeOfCharPtrPtr => width(size_of::<*mut *mut libc::c_char>()),
            Query::SizeOfIntPtr => width(size_of::<*mut libc::c_int>()),
            Query::SizeOfTimespecPtr => width(size_of::<*const libc::timespec>()),
            Query::OffsetOfTimespecSec => width(offset_of!(libc::timespec, tv_sec)),
            Query::OffsetOfTimespecNsec => width(offset_of!(libc::timespec, tv_nsec)),
            Query::FGetfl => libc::F_GETFL.into(),
            Query::ORdonly => libc::O_RDONLY.into(),
            Query::ONonblock => libc::O_NONBLOCK.into(),
            Query::Pollin => libc::POLLIN.into(),
            Query::Pollout => libc::POLLOUT.into(),
        }
    }
}

/// Identity of the compilation target, recorded in reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetInfo {
    pub arch: String,
    pub os: String,
    pub pointer_width: u32,
}

impl TargetInfo {
    pub fn current() -> Self {
        Self {
            arch: std::env::consts::ARCH.to_string(),
            os: std::env::consts::OS.to_string(),
            pointer_width: usize::BITS,
        }
    }
}
