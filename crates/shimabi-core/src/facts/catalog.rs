use serde::{Deserialize, Serialize};

/// How a fact's pinned value is compared against the platform.
///
/// All kinds reduce to integer equality; the kind exists so that reports
/// say what sort of assumption broke.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    ConstantEquals,
    TypeSizeEquals,
    StructSizeEquals,
    FieldOffsetEquals,
}

/// Build variant selecting a subset of the fact table.
///
/// Profiles are nested: `Extended` includes every `Minimal` fact.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Minimal,
    #[default]
    Extended,
}

impl Profile {
    /// Whether a fact tagged `tag` is checked under this profile.
    pub fn includes(self, tag: Profile) -> bool {
        tag <= self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Minimal => "minimal",
            Profile::Extended => "extended",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform quantity resolved at verification time.
///
/// Queries name *where* the real value comes from; they never carry the
/// value itself, so every run re-reads the live environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    SizeOfTimeT,
    SizeOfLong,
    SizeOfTimespec,
    SizeOfPollfd,
    SizeOfStat,
    SizeOfCharPtrPtr,
    SizeOfIntPtr,
    SizeOfTimespecPtr,
    OffsetOfTimespecSec,
    OffsetOfTimespecNsec,
    FGetfl,
    ORdonly,
    ONonblock,
    Pollin,
    Pollout,
}

impl Query {
    /// The only fact kind this query can back.
    pub const fn kind(self) -> FactKind {
        match self {
            Query::SizeOfTimeT
            | Query::SizeOfLong
            | Query::SizeOfCharPtrPtr
            | Query::SizeOfIntPtr
            | Query::SizeOfTimespecPtr => FactKind::TypeSizeEquals,
            Query::SizeOfTimespec | Query::SizeOfPollfd | Query::SizeOfStat => {
                FactKind::StructSizeEquals
            }
            Query::OffsetOfTimespecSec | Query::OffsetOfTimespecNsec => {
                FactKind::FieldOffsetEquals
            }
            Query::FGetfl
            | Query::ORdonly
            | Query::ONonblock
            | Query::Pollin
            | Query::Pollout => FactKind::ConstantEquals,
        }
    }
}

/// A single pinned expectation about the target platform.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Fact {
    /// Label printed when this fact fails.
    pub name: &'static str,
    pub kind: FactKind,
    /// Value the shim hard-codes. Frozen at authoring time.
    pub expected: i64,
    pub source: Query,
    /// Smallest profile that checks this fact.
    pub profile: Profile,
}

impl Fact {
    /// The kind is taken from `source`, so a fact cannot disagree with the
    /// query backing it.
    pub const fn new(name: &'static str, expected: i64, source: Query, profile: Profile) -> Self {
        Self {
            name,
            kind: source.kind(),
            expected,
            source,
            profile,
        }
    }

    /// Copy of this fact with a different pinned value.
    pub fn with_expected(self, expected: i64) -> Self {
        Self { expected, ..self }
    }

    pub fn holds(&self, actual: i64) -> bool {
        actual == self.expected
    }
}
