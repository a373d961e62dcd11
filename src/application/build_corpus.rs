use crate::domain::entities::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

const EMBED_BATCH: usize = 32;

/// Embeds snippets and appends them to the corpus. Population is always an
/// explicit call; nothing embeds lazily on first query.
pub struct BuildCorpusUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
}

impl BuildCorpusUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, vector_store }
    }

    /// Returns the corpus size afterwards. Snippets keep their input order,
    /// and either every snippet is added or none is.
    pub async fn execute(&self, snippets: Vec<String>) -> Result<usize, DomainError> {
        if snippets.is_empty() {
            return Ok(self.vector_store.len());
        }

        let mut entries = Vec::with_capacity(snippets.len());
        for chunk in snippets.chunks(EMBED_BATCH) {
            let vectors = self.embedder.embed(chunk, InputType::Document).await?;
            if vectors.len() != chunk.len() {
                return Err(DomainError::Embedding(format!(
                    "Provider returned {} vectors for {} snippets",
                    vectors.len(),
                    chunk.len()
                )));
            }
            for (text, vector) in chunk.iter().zip(vectors) {
                entries.push(Entry::new(vector, text.clone()));
            }
        }

        let added = entries.len();
        let total = self.vector_store.append_batch(entries)?;
        tracing::info!(added, total, "corpus built");
        Ok(total)
    }
}
