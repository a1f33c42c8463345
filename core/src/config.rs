use serde::{Deserialize, Serialize};

/// Bucket count used when none is configured. Prime, so FNV-1a hashes spread
/// evenly across chains.
pub const DEFAULT_BUCKET_COUNT: usize = 10007;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of hash buckets in the term dictionary. Fixed for the lifetime
    /// of the index; the table never resizes.
    pub bucket_count: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { bucket_count: DEFAULT_BUCKET_COUNT }
    }
}

impl IndexConfig {
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self { bucket_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: IndexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.bucket_count, DEFAULT_BUCKET_COUNT);

        let cfg: IndexConfig = serde_json::from_str(r#"{"bucket_count": 17}"#).unwrap();
        assert_eq!(cfg, IndexConfig::with_bucket_count(17));
    }
}
