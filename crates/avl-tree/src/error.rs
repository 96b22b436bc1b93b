use thiserror::Error;

/// Structural defect reported by [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).
///
/// None of these can be produced through the public operations; they exist
/// so tests and fuzzers can pinpoint what broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("node order violated at {key}")]
    OrderViolated { key: String },
    #[error("stale height at {key}: stored {stored}, actual {actual}")]
    HeightMismatch {
        key: String,
        stored: u32,
        actual: u32,
    },
    #[error("AVL balance violated at {key}: balance factor {balance}")]
    Unbalanced { key: String, balance: i32 },
    #[error("size mismatch: tracked {tracked}, reachable {reachable}")]
    SizeMismatch { tracked: usize, reachable: usize },
}
