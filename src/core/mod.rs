// src/core/mod.rs
pub mod sizing;
