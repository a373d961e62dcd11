pub mod precomputed;
