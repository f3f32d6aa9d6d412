pub mod cache;
pub mod gain;
pub mod iterations;
pub mod layout;
pub mod matrix;
pub mod scoring;
pub mod stats;
