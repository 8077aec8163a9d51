//! JSON array codec
//!
//! Encodes a set as a JSON array of its elements' natural JSON encodings
//! and decodes such an array back, inserting into an existing set.
//!
//! Decoding is atomic: the whole array is parsed into a temporary buffer
//! before the receiver is touched, so a failed decode leaves the receiver
//! exactly as it was.

use alloc::vec::Vec;
use core::hash::BuildHasher;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ParseError, SetError, SetResult};
use crate::sets::Set;
use crate::traits::{Element, JsonDecode, JsonEncode};

impl<T, S> JsonEncode for Set<T, S>
where
    T: Serialize,
{
    /// Encodes the set as a JSON array
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// assert_eq!(Set::<i32>::new().to_json()?, b"[]");
    /// assert_eq!(Set::from_values(["x"]).to_json()?, b"[\"x\"]");
    /// # Ok::<(), uniqset::error::SetError>(())
    /// ```
    fn to_json(&self) -> SetResult<Vec<u8>> {
        let bytes = serde_json::to_vec(self).map_err(|_| SetError::Encode)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(elements = self.len(), bytes = bytes.len(), "encoded set");

        Ok(bytes)
    }
}

impl<T, S> JsonDecode for Set<T, S>
where
    T: Element + DeserializeOwned,
    S: BuildHasher,
{
    /// Decodes a JSON array and inserts every element (union, not replace)
    ///
    /// # Example
    /// ```rust
    /// use uniqset::prelude::*;
    /// let mut set = Set::from_values([1, 2]);
    /// set.extend_from_json(b"[2, 3]")?;
    /// assert_eq!(set, Set::from_values([1, 2, 3]));
    ///
    /// assert!(set.extend_from_json(b"[4, \"five\"]").is_err());
    /// assert_eq!(set, Set::from_values([1, 2, 3]));
    /// # Ok::<(), uniqset::error::SetError>(())
    /// ```
    fn extend_from_json(&mut self, bytes: &[u8]) -> SetResult<()> {
        let values = decode_values::<T>(bytes)?;

        #[cfg(feature = "tracing")]
        let before = self.len();

        self.add_all(values);

        #[cfg(feature = "tracing")]
        tracing::trace!(added = self.len() - before, total = self.len(), "decoded set");

        Ok(())
    }
}

/// Decodes a JSON array into `slot`, creating an empty set there first if
/// the slot holds none
///
/// An existing set in the slot is extended, not replaced. The slot is
/// initialized even when decoding fails; the new set is then empty.
///
/// # Example
/// ```rust
/// use uniqset::prelude::*;
/// use uniqset::codec::decode_into_slot;
///
/// let mut slot: Option<Set<u32>> = None;
/// decode_into_slot(&mut slot, b"[3, 1, 3]")?;
/// assert_eq!(slot, Some(Set::from_values([1, 3])));
/// # Ok::<(), uniqset::error::SetError>(())
/// ```
pub fn decode_into_slot<'a, T, S>(
    slot: &'a mut Option<Set<T, S>>,
    bytes: &[u8],
) -> SetResult<&'a mut Set<T, S>>
where
    T: Element + DeserializeOwned,
    S: BuildHasher + Default,
{
    let set = slot.get_or_insert_with(Set::default);
    set.extend_from_json(bytes)?;
    Ok(set)
}

fn decode_values<T: DeserializeOwned>(bytes: &[u8]) -> SetResult<Vec<T>> {
    serde_json::from_slice::<Vec<T>>(bytes).map_err(|error| {
        let error = ParseError::from(error);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = error.kind.as_str(),
            line = error.line,
            column = error.column,
            "failed to decode set"
        );

        SetError::Parse(error)
    })
}
