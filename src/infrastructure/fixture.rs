//! JSON fixture of precomputed vectors used by the command-line driver.
//!
//! ```json
//! {
//!   "entries": [{ "embedding": [1.0, 0.0], "payload": "VPN is required off-site." }],
//!   "queries": { "how do I work from home?": [0.9, 0.1] }
//! }
//! ```

use crate::domain::entities::entry::Entry;
use crate::domain::error::DomainError;
use crate::infrastructure::embeddings::precomputed::PrecomputedProvider;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub entries: Vec<Entry<String>>,
    #[serde(default)]
    pub queries: HashMap<String, Vec<f64>>,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::Parse(format!("Invalid fixture: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::InvalidInput(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Provider that knows every snippet and every named query in the fixture.
    pub fn provider(&self) -> PrecomputedProvider {
        let mut vectors = self.queries.clone();
        for entry in &self.entries {
            vectors.insert(entry.payload().clone(), entry.embedding().to_vec());
        }
        PrecomputedProvider::new(vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let fx = Fixture::from_json(
            r#"{"entries":[{"embedding":[1,0],"payload":"a"}],"queries":{"q":[0.5,0.5]}}"#,
        )
        .unwrap();
        assert_eq!(fx.entries.len(), 1);
        assert_eq!(fx.entries[0].embedding(), &[1.0, 0.0]);
        assert_eq!(fx.entries[0].payload(), "a");
        assert_eq!(fx.queries["q"], vec![0.5, 0.5]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let fx = Fixture::from_json("{}").unwrap();
        assert!(fx.entries.is_empty());
        assert!(fx.queries.is_empty());
    }

    #[test]
    fn test_malformed_fixture_is_parse_error() {
        assert!(matches!(Fixture::from_json("[1,2"), Err(DomainError::Parse(_))));
    }
}
