use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
/// Asset loading policy.
pub struct LoaderOptions {
    /// How many times a failed model load is retried before giving up.
    /// Zero (the default) means a failed load fails for good.
    pub max_retries: u32,
}
