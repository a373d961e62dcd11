pub mod corpus_stats;
pub mod entry;
pub mod scored_result;
