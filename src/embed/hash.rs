use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::AppResult;

use super::Embedder;

/// Deterministic pseudo-embedder.
///
/// Hashes whitespace tokens into a fixed-dimension vector so that identical
/// text always maps to the same vector and overlapping texts land near each
/// other. Never produces the zero vector for non-empty text. Useful for
/// tests and local runs without a model server.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "embedding dimension must be positive");
        Self { dim }
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];
        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();
            let index = (h % self.dim as u64) as usize;
            // Alternate sign from a higher hash bit to spread tokens over
            // the full range.
            let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
            vector[index] += sign;
        }
        // Guarantee a non-zero vector even if every token cancels out.
        if vector.iter().all(|v| *v == 0.0) {
            vector[0] = 1.0;
        }
        vector
    }
}

#[async_trait::async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        Ok(self.encode(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identical_text_embeds_identically() {
        let embedder = HashEmbedder::new(16);
        let a = embedder.embed("jazz night downtown").await.unwrap();
        let b = embedder.embed("jazz night downtown").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[tokio::test]
    async fn test_never_zero_for_nonempty_text() {
        let embedder = HashEmbedder::new(8);
        let v = embedder.embed("rock").await.unwrap();
        assert!(v.iter().any(|x| *x != 0.0));
    }
}
