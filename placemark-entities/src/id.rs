use std::{fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

/// Stable identifier of a record, assigned once at creation.
///
/// Displayed and parsed in the canonical hyphenated UUID form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for Id {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

impl From<Id> for Uuid {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl AsRef<Uuid> for Id {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid record id")]
pub struct IdParseError;

impl FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(Into::into).map_err(|_| IdParseError)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
