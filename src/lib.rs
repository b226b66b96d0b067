pub mod error;
pub mod graph;
pub mod scan;
pub mod traversal;
pub mod check;

// Re-exports to flatten the crate.
pub use error::{Field, InputError};
pub use graph::Graph;
pub use check::{check, run, Strategy, Verdict};
