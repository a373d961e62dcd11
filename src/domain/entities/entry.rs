use serde::{Deserialize, Serialize};

/// One corpus element: a precomputed embedding and the payload it stands for.
///
/// The embedding is fixed at construction; there is no way to mutate it
/// through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<P> {
    embedding: Vec<f64>,
    payload: P,
}

impl<P> Entry<P> {
    pub fn new(embedding: Vec<f64>, payload: P) -> Self {
        Self { embedding, payload }
    }

    pub fn embedding(&self) -> &[f64] {
        &self.embedding
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
