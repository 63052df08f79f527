//! Canonical fact table for the wasm32 WASI profile.
//!
//! Table order decides which fact is reported when several fail: the
//! verifier stops at the first one. Facts added after the original set are
//! appended so they never shadow an earlier failure.

use crate::facts::catalog::{Fact, Profile, Query};

use Profile::{Extended, Minimal};

pub static FACTS: &[Fact] = &[
    Fact::new("size of time_t", 8, Query::SizeOfTimeT, Minimal),
    Fact::new("size of long", 4, Query::SizeOfLong, Minimal),
    Fact::new("size of struct timespec", 16, Query::SizeOfTimespec, Minimal),
    Fact::new("size of struct pollfd", 8, Query::SizeOfPollfd, Extended),
    Fact::new("size of struct stat", 144, Query::SizeOfStat, Extended),
    Fact::new("size of generic pointer", 4, Query::SizeOfCharPtrPtr, Minimal),
    Fact::new("size of int pointer", 4, Query::SizeOfIntPtr, Minimal),
    Fact::new("value of F_GETFL", 3, Query::FGetfl, Minimal),
    Fact::new("value of O_RDONLY", 0x400_0000, Query::ORdonly, Minimal),
    Fact::new("value of O_NONBLOCK", 0x4, Query::ONonblock, Minimal),
    Fact::new("value of POLLIN", 0x001, Query::Pollin, Extended),
    Fact::new("value of POLLOUT", 0x002, Query::Pollout, Extended),
    Fact::new("size of timespec pointer", 4, Query::SizeOfTimespecPtr, Extended),
    Fact::new("offset of timespec tv_sec", 0, Query::OffsetOfTimespecSec, Extended),
    Fact::new("offset of timespec tv_nsec", 8, Query::OffsetOfTimespecNsec, Extended),
];

/// Facts checked under `profile`, in table order.
pub fn select(profile: Profile) -> Vec<Fact> {
    FACTS
        .iter()
        .filter(|fact| profile.includes(fact.profile))
        .copied()
        .collect()
}

/// Look up a fact by its label.
pub fn find(name: &str) -> Option<&'static Fact> {
    FACTS.iter().find(|fact| fact.name == name)
}
