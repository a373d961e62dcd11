use serde::Serialize;

/// A payload paired with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<P> {
    pub score: f64,
    pub payload: P,
}

impl<P> ScoredResult<P> {
    pub fn new(score: f64, payload: P) -> Self {
        Self { score, payload }
    }
}
