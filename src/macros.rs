//! Set construction macro

/// Creates a [`Set`](crate::sets::Set) holding the given values
///
/// Duplicates collapse the same way they do in
/// [`Set::from_values`](crate::sets::Set::from_values).
///
/// # Example
///
/// ```rust
/// use uniqset::set;
///
/// let ports = set![80, 443, 80];
/// assert_eq!(ports.len(), 2);
/// assert!(ports.contains(&443));
///
/// let empty: uniqset::sets::Set<u16> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::sets::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::sets::Set::from_values([$($value),+])
    };
}
