use crate::domain::error::DomainError;
use crate::domain::values::top_k::TopK;
use std::path::PathBuf;

pub const TOP_K_VAR: &str = "MEMRANK_TOP_K";
pub const FIXTURE_VAR: &str = "MEMRANK_FIXTURE";

/// Settings read from the environment once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Result count when a caller does not ask for one.
    pub default_k: TopK,
    /// Fixture the CLI reads when none is given on the command line.
    pub fixture: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_k = match lookup(TOP_K_VAR) {
            None => TopK::default(),
            Some(raw) => parse_top_k(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring invalid MEMRANK_TOP_K, using default");
                TopK::default()
            }),
        };
        let fixture = lookup(FIXTURE_VAR).filter(|p| !p.is_empty()).map(PathBuf::from);
        Self { default_k, fixture }
    }
}

fn parse_top_k(raw: &str) -> Result<TopK, DomainError> {
    let k: i64 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::Config(format!("{TOP_K_VAR}={raw:?}: {e}")))?;
    TopK::try_from(k).map_err(|e| DomainError::Config(format!("{TOP_K_VAR}={raw:?}: {e}")))
}
