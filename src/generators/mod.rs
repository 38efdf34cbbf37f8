// src/generators/mod.rs
pub mod password;
pub mod source;

pub use password::PasswordGenerator;
pub use source::SamplingSource;
