//! Exact top-k retrieval over a corpus of embeddings.
//!
//! Every entry is scored with a raw dot product against the query and the k
//! best are kept in a bounded min-heap. The heap key is `(score, corpus
//! index)` with lower indices winning ties, so the output is the same as a
//! stable descending sort truncated to k.

use crate::domain::entities::entry::Entry;
use crate::domain::entities::scored_result::ScoredResult;
use crate::domain::error::DomainError;
use crate::domain::values::similarity::{compare_scores, dot_product};
use crate::domain::values::top_k::TopK;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Rank `corpus` against `query` and return the `min(k, corpus.len())`
/// highest-scoring payloads, best first.
///
/// Inputs are validated before anything is scored: an empty corpus fails
/// with [`DomainError::EmptyCorpus`], `k == 0` with [`DomainError::InvalidK`],
/// and any length disagreement between the query and the entries with
/// [`DomainError::DimensionMismatch`].
pub fn rank<P: Clone>(
    corpus: &[Entry<P>],
    query: &[f64],
    k: usize,
) -> Result<Vec<ScoredResult<P>>, DomainError> {
    if corpus.is_empty() {
        return Err(DomainError::EmptyCorpus);
    }
    if k < 1 {
        return Err(DomainError::InvalidK(0));
    }
    let dimension = check_dimensions(corpus, query)?;

    tracing::debug!(entries = corpus.len(), dimension, k, "ranking corpus");

    let keep = k.min(corpus.len());
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(keep + 1);
    for (index, entry) in corpus.iter().enumerate() {
        let candidate = Candidate {
            score: dot_product(query, entry.embedding()),
            index,
        };
        if heap.len() < keep {
            heap.push(Reverse(candidate));
            continue;
        }
        let beats_worst = matches!(heap.peek(), Some(Reverse(worst)) if candidate > *worst);
        if beats_worst {
            heap.pop();
            heap.push(Reverse(candidate));
        }
    }

    let mut selected: Vec<Candidate> = heap.into_iter().map(|Reverse(c)| c).collect();
    selected.sort_by(|a, b| b.cmp(a));

    Ok(selected
        .into_iter()
        .map(|c| ScoredResult::new(c.score, corpus[c.index].payload().clone()))
        .collect())
}

/// Returns the shared dimension, or the first disagreement found.
/// The query is compared first, then entries in corpus order.
fn check_dimensions<P>(corpus: &[Entry<P>], query: &[f64]) -> Result<usize, DomainError> {
    let expected = corpus[0].dimension();
    if query.len() != expected {
        return Err(DomainError::DimensionMismatch {
            expected,
            actual: query.len(),
            index: None,
        });
    }
    if let Some((index, entry)) = corpus
        .iter()
        .enumerate()
        .find(|(_, e)| e.dimension() != expected)
    {
        return Err(DomainError::DimensionMismatch {
            expected,
            actual: entry.dimension(),
            index: Some(index),
        });
    }
    Ok(expected)
}

struct Candidate {
    score: f64,
    index: usize,
}

impl Ord for Candidate {
    /// Greater means ranked earlier: higher score, then lower corpus index.
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scores(self.score, other.score).then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Stateless handle over [`rank`] for code that wants to hold a ranker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker;

impl SimilarityRanker {
    pub fn new() -> Self {
        SimilarityRanker
    }

    pub fn rank<P: Clone>(
        &self,
        corpus: &[Entry<P>],
        query: &[f64],
        k: TopK,
    ) -> Result<Vec<ScoredResult<P>>, DomainError> {
        rank(corpus, query, k.value())
    }
}
