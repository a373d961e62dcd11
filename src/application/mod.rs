pub mod build_corpus;
pub mod retrieve;
