use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub entries: usize,
    pub dimension: Option<usize>,
}
