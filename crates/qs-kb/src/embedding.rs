//! Optional embedding capability for fuzzy schema matching.
//!
//! The catalog takes an `Option<Box<dyn EmbeddingProvider>>`; when absent,
//! fuzzy matching is skipped entirely and the catalog still performs exact
//! matching and minting.

use crate::error::KbResult;

/// An external provider that turns text into a dense vector.
pub trait EmbeddingProvider {
    /// Encode `text` into an embedding vector.
    fn encode(&self, text: &str) -> KbResult<Vec<f32>>;
}

/// Cosine similarity between two vectors.
///
/// Returns `None` for mismatched lengths or zero-norm inputs so callers can
/// skip the entry instead of comparing against a meaningless value.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += f64::from(x) * f64::from(y);
        norm_a += f64::from(x) * f64::from(x);
        norm_b += f64::from(y) * f64::from(y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

#[cfg(test)]
#[path = "embedding_test.rs"]
mod tests;
