use serde::{Deserialize, Serialize};

/// Default expansion cap: unbounded. Callers that need bounded latency set one explicitly.
pub const DEFAULT_MAX_EXPANSIONS: Option<u64> = None;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Stop with `Failure::ExpansionLimit` once this many nodes have been expanded.
    /// Hill climbing counts each node whose neighbours were generated, including
    /// the last one it rejects.
    pub max_expansions: Option<u64>,
}

impl SearchOptions {
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self { max_expansions: Some(max_expansions) }
    }

    /// Returns true when `expanded` has reached the configured cap.
    pub fn limit_reached(&self, expanded: u64) -> bool {
        self.max_expansions.map(|cap| expanded >= cap).unwrap_or(false)
    }
}
