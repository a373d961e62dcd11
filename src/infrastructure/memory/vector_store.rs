use crate::domain::entities::entry::Entry;
use crate::domain::entities::scored_result::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::ranking::rank;
use crate::domain::values::top_k::TopK;
use std::sync::{Arc, Mutex, MutexGuard};

/// Copy-on-write corpus held in process memory.
///
/// Readers clone the inner `Arc` and rank without holding the lock. An append
/// while a snapshot is alive copies the vector once, so a ranking in progress
/// never observes a half-appended corpus.
#[derive(Default)]
pub struct InMemoryVectorStore {
    entries: Mutex<Arc<Vec<Entry<String>>>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Arc<Vec<Entry<String>>>> {
        // Appends only push after validation, so a poisoned corpus is still whole.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A stored corpus always has D >= 1. `rank` itself accepts D == 0, but an
    /// empty embedding reaching the store means a provider produced nothing.
    fn check_dimension(expected: Option<usize>, embedding: &[f64], index: usize) -> Result<usize, DomainError> {
        if embedding.is_empty() {
            return Err(DomainError::InvalidInput(format!("Entry {index} has an empty embedding")));
        }
        match expected {
            Some(expected) if expected != embedding.len() => Err(DomainError::DimensionMismatch {
                expected,
                actual: embedding.len(),
                index: Some(index),
            }),
            _ => Ok(embedding.len()),
        }
    }
}

impl VectorStore for InMemoryVectorStore {
    fn append(&self, embedding: Vec<f64>, payload: String) -> Result<usize, DomainError> {
        let mut guard = self.lock();
        let index = guard.len();
        Self::check_dimension(guard.first().map(Entry::dimension), &embedding, index)?;
        Arc::make_mut(&mut guard).push(Entry::new(embedding, payload));
        Ok(index)
    }

    fn append_batch(&self, entries: Vec<Entry<String>>) -> Result<usize, DomainError> {
        let mut guard = self.lock();
        let start = guard.len();
        let mut expected = guard.first().map(Entry::dimension);
        for (offset, entry) in entries.iter().enumerate() {
            expected = Some(Self::check_dimension(expected, entry.embedding(), start + offset)?);
        }
        if entries.is_empty() {
            return Ok(start);
        }
        let corpus = Arc::make_mut(&mut guard);
        corpus.extend(entries);
        tracing::debug!(added = corpus.len() - start, total = corpus.len(), "appended batch");
        Ok(corpus.len())
    }

    fn snapshot(&self) -> Arc<Vec<Entry<String>>> {
        let guard = self.lock();
        Arc::clone(&*guard)
    }

    fn search_similar(&self, query: &[f64], k: TopK) -> Result<Vec<ScoredResult<String>>, DomainError> {
        let corpus = self.snapshot();
        rank(corpus.as_slice(), query, k.value())
    }

    fn dimension(&self) -> Option<usize> {
        self.lock().first().map(Entry::dimension)
    }
}
