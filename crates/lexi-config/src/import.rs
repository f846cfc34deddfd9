use std::env;

use serde::{Deserialize, Serialize};

fn default_sample_size() -> usize {
    5
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Pairs echoed back in an upload response
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        let sample_size = env::var("LEXI_SAMPLE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sample_size);

        let max_upload_bytes = env::var("LEXI_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_upload_bytes);

        Self {
            sample_size,
            max_upload_bytes,
        }
    }
}
