use crate::domain::entities::scored_result::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::top_k::TopK;
use std::sync::Arc;

pub struct RetrieveUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
}

impl RetrieveUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, vector_store }
    }

    pub async fn retrieve(&self, query: &str, k: TopK) -> Result<Vec<ScoredResult<String>>, DomainError> {
        let mut vectors = self.embedder.embed(&[query.to_string()], InputType::Query).await?;
        if vectors.is_empty() {
            return Err(DomainError::Embedding("Provider returned no vector for the query".into()));
        }
        let query_vector = vectors.swap_remove(0);
        self.vector_store.search_similar(&query_vector, k)
    }

    /// Top-k snippets only, best first.
    pub async fn retrieve_text(&self, query: &str, k: TopK) -> Result<Vec<String>, DomainError> {
        let results = self.retrieve(query, k).await?;
        Ok(results.into_iter().map(|r| r.payload).collect())
    }
}

/// Bullet list of snippets, ready to drop into a prompt as context.
pub fn render_context(results: &[ScoredResult<String>]) -> String {
    results
        .iter()
        .map(|r| format!("- {}", r.payload))
        .collect::<Vec<_>>()
        .join("\n")
}
