//! Set implementations
//!
//! This module provides the hash-backed [`Set`] and its iterators.

pub mod hash_set;
pub mod iter;

// Re-export main types
pub use hash_set::Set;
pub use iter::{IntoIter, Iter};
