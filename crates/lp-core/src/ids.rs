use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// Compact, stable identifier for an entry row.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
/// - rendered as a plain decimal string ("1", "2", ...)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// The first id handed out by a fresh allocator.
    pub const FIRST: Id = Id(NonZeroU32::MIN);

    /// Create an Id from its raw value. Zero is rejected.
    pub fn new(raw: u32) -> CoreResult<Self> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(CoreError::InvalidArg { what: "id must be nonzero" })
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id immediately after this one.
    pub fn next(self) -> CoreResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(CoreError::IdOverflow { last: self.get() })
    }

    /// Max-existing-plus-one over a set of live ids, or [`Id::FIRST`] when empty.
    ///
    /// Gaps left by removed rows are never reused below the current maximum.
    pub fn after_max<I>(ids: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Id>,
    {
        match ids.into_iter().max() {
            Some(max) => max.next(),
            None => Ok(Self::FIRST),
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.get())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for Id {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId {
                text: s.to_string(),
            })
    }
}

/// Domain-specific ID alias for clarity (no runtime cost).
pub type EntryId = Id;
