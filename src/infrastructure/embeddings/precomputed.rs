use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use std::collections::HashMap;

/// Serves vectors that were computed ahead of time, keyed by exact text.
pub struct PrecomputedProvider {
    vectors: HashMap<String, Vec<f64>>,
}

impl PrecomputedProvider {
    pub fn new(vectors: HashMap<String, Vec<f64>>) -> Self {
        Self { vectors }
    }

    pub fn insert(&mut self, text: impl Into<String>, vector: Vec<f64>) {
        self.vectors.insert(text.into(), vector);
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for PrecomputedProvider {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f64>>, DomainError> {
        texts
            .iter()
            .map(|t| {
                self.vectors.get(t).cloned().ok_or_else(|| {
                    DomainError::Embedding(format!("No precomputed {input_type:?} vector for \"{t}\""))
                })
            })
            .collect()
    }

    /// 0 when empty or when the stored vectors disagree on length.
    fn dimension(&self) -> usize {
        let mut lengths = self.vectors.values().map(Vec::len);
        match lengths.next() {
            Some(first) if lengths.all(|len| len == first) => first,
            _ => 0,
        }
    }
}
