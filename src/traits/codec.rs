//! Serialization codec traits
//!
//! Encoding and decoding are separate traits: encoding only borrows the
//! elements, so it must not demand that they can be decoded back.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{SetError, SetResult};

/// Trait for collections that encode as a JSON array
///
/// Every element is written once, in no particular order.
pub trait JsonEncode {
    /// Encodes the collection as a JSON array
    ///
    /// An empty collection encodes to exactly `[]`.
    fn to_json(&self) -> SetResult<Vec<u8>>;

    /// Encodes the collection as a JSON array string
    fn to_json_string(&self) -> SetResult<String> {
        let bytes = self.to_json()?;
        String::from_utf8(bytes).map_err(|_| SetError::Encode)
    }
}

/// Trait for collections that decode from a JSON array
///
/// Decoding is additive: elements already in the receiver stay there.
pub trait JsonDecode {
    /// Decodes a JSON array and inserts each element into the collection
    ///
    /// On error the receiver is left unchanged.
    fn extend_from_json(&mut self, bytes: &[u8]) -> SetResult<()>;

    /// Decodes a JSON array into a new collection
    fn from_json(bytes: &[u8]) -> SetResult<Self>
    where
        Self: Default + Sized,
    {
        let mut collection = Self::default();
        collection.extend_from_json(bytes)?;
        Ok(collection)
    }
}
