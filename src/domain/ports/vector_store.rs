use crate::domain::entities::entry::Entry;
use crate::domain::entities::scored_result::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::values::top_k::TopK;
use std::sync::Arc;

/// Append-only corpus of text snippets and their embeddings.
///
/// The first append fixes the corpus dimension; later appends must match it.
pub trait VectorStore: Send + Sync {
    /// Returns the index assigned to the new entry.
    fn append(&self, embedding: Vec<f64>, payload: String) -> Result<usize, DomainError>;

    /// All-or-nothing: the batch is validated before any entry is added.
    /// Returns the corpus length afterwards.
    fn append_batch(&self, entries: Vec<Entry<String>>) -> Result<usize, DomainError>;

    /// The corpus as of now. Later appends are not visible through it.
    fn snapshot(&self) -> Arc<Vec<Entry<String>>>;

    fn search_similar(&self, query: &[f64], k: TopK) -> Result<Vec<ScoredResult<String>>, DomainError>;

    fn dimension(&self) -> Option<usize>;

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
