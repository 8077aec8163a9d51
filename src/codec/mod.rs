//! Serialization support
//!
//! A set serializes as a bare sequence of its elements: no wrapper object,
//! no type tag, no ordering guarantee. The `serde` feature provides the
//! `Serialize`/`Deserialize` impls; the `json` feature adds the JSON codec
//! built on them.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "json")]
pub use json::decode_into_slot;
