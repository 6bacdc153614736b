//! Upstream LLM provider implementations

pub mod xai;

// Re-export for convenience
pub use xai::XaiClient;
