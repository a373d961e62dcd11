use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of results requested from a ranking. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TopK(usize);

impl TopK {
    pub fn new(k: usize) -> Result<Self, DomainError> {
        if k < 1 {
            return Err(DomainError::InvalidK(0));
        }
        Ok(TopK(k))
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// Optional signed count from the command line; `None` means "use the default".
    pub fn from_arg(k: Option<i64>) -> Result<Option<Self>, DomainError> {
        k.map(TopK::try_from).transpose()
    }
}

impl TryFrom<i64> for TopK {
    type Error = DomainError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        if k < 1 {
            return Err(DomainError::InvalidK(k));
        }
        let k = usize::try_from(k).map_err(|_| DomainError::InvalidK(k))?;
        Ok(TopK(k))
    }
}

impl From<TopK> for i64 {
    fn from(k: TopK) -> Self {
        i64::try_from(k.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for TopK {
    /// Three snippets is enough context for a short prompt.
    fn default() -> Self {
        TopK(3)
    }
}
