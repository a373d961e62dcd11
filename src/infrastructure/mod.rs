pub mod embeddings;
pub mod fixture;
pub mod memory;
