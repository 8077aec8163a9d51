//! Core traits module
//!
//! This module defines the capability bound every set element satisfies and
//! the codec interfaces sets expose for serialization.

#[cfg(feature = "json")]
pub mod codec;
pub mod element;

// Re-export main traits
#[cfg(feature = "json")]
pub use codec::{JsonDecode, JsonEncode};
pub use element::Element;
