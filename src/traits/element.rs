//! Element capability bound
//!
//! Set membership is decided by a hash table, so elements must hash and
//! compare for equality. The bound is spelled out as a trait so it reads the
//! same everywhere a set is generic over its element type.

use core::hash::Hash;

/// A value that can be stored in a [`Set`](crate::sets::Set)
///
/// Implemented for every `Hash + Eq` type. Implementations must keep `Hash`
/// and `Eq` consistent: values that compare equal must hash equally.
///
/// # Example
/// ```rust
/// use uniqset::traits::Element;
///
/// fn assert_element<T: Element>() {}
///
/// assert_element::<u32>();
/// assert_element::<&str>();
/// assert_element::<(u8, char)>();
/// ```
pub trait Element: Hash + Eq {}

impl<T: Hash + Eq + ?Sized> Element for T {}
