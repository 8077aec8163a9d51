#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Unordered Sets of Unique Elements**
//!
//! uniqset is a small `no_std` Rust library providing [`Set`], a generic
//! collection of unique hashable elements backed by a hash table, with bulk
//! operations and a JSON array codec.
//!
//! ## Features
//!
//! - **Generic** - Any `Hash + Eq` element type, any `BuildHasher`
//! - **Bulk Operations** - Insert, remove and query many values at once
//! - **Union In Place** - Merge one set into another without touching the source
//! - **JSON Codec** - Bare JSON array encoding with atomic, additive decoding
//! - **No Standard Library** - Needs only `alloc`
//!
//! ## Feature Overview
//!
//! ### Serialization Features
//! - `serde` - Serde `Serialize`/`Deserialize` for [`Set`] (no_std compatible)
//! - `json` - JSON codec via [`JsonEncode`] and [`JsonDecode`] (enabled by default, implies `serde`)
//!
//! ### Diagnostics Features
//! - `tracing` - Emit `tracing` events from the JSON codec
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! uniqset = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use uniqset::prelude::*;
//!
//! fn example() -> Result<(), SetError> {
//!     // Duplicates collapse on construction
//!     let mut enabled = Set::from_values([1, 2, 3, 4, 3, 1]);
//!     assert_eq!(enabled.len(), 4);
//!
//!     // Bulk mutation
//!     enabled.remove_all([1, 3]);
//!     enabled.add_set(&Set::from_values([5, 6]));
//!     assert!(enabled.contains_all([2, 4, 5, 6]));
//!
//!     // Round-trip through JSON, order is not preserved
//!     let bytes = enabled.to_json()?;
//!     let decoded = Set::<i32>::from_json(&bytes)?;
//!     assert_eq!(decoded, enabled);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Ordering
//!
//! Iteration order, [`Set::to_vec`] order and encoded JSON order are all
//! unspecified and may change between calls. Compare sets with `==`.
//!
//! [`Set`]: crate::sets::Set
//! [`Set::to_vec`]: crate::sets::Set::to_vec
//! [`JsonEncode`]: crate::traits::JsonEncode
//! [`JsonDecode`]: crate::traits::JsonDecode

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]

extern crate alloc;

// Core infrastructure modules
pub mod error;
pub mod traits;

// Set implementation
pub mod sets;

// Serialization
pub mod codec;

mod macros;

/// Prelude module of uniqset
///
/// Convenient re-exports for common uniqset types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export error types
    pub use crate::error::{ParseError, ParseErrorKind, SetError, SetResult};

    // Re-export the set
    pub use crate::sets::Set;

    pub use crate::set;
}
