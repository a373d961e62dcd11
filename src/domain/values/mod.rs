pub mod similarity;
pub mod top_k;
