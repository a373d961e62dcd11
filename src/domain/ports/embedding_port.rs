use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Document,
    Query,
}

/// Turns text into vectors. Implementations live outside the core; the
/// ranker only ever sees the vectors they return.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f64>>, DomainError>;

    /// Output dimension, or 0 when the provider cannot tell in advance.
    fn dimension(&self) -> usize;
}
