use serde::{Deserialize, Serialize};

/// Default bound on both expression size and number of visited states.
pub const THRESHOLD: usize = 1024;

/// Safety limits for full evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
	/// Every state produced by a step must be strictly smaller than this.
	pub max_size: usize,
	/// Evaluation fails once this many distinct states have been visited.
	pub max_states: usize,
}

impl EvalConfig {
	/// Use the same bound for size and visited states.
	pub const fn with_threshold(threshold: usize) -> Self {
		Self { max_size: threshold, max_states: threshold }
	}
}

impl Default for EvalConfig {
	fn default() -> Self {
		Self::with_threshold(THRESHOLD)
	}
}
