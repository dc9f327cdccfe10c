//!
//! Batch validation of possibly-absent values.
//!

use crate::error::{Error, Result};

///
/// Unwraps a batch of possibly-absent values, failing on the first `None`.
///
/// This is the single gate through which external, possibly-absent content
/// enters a [`SortedVec`](crate::SortedVec): checked constructors, checked
/// mutators and fallible transforms all validate their whole batch here
/// before touching any backing storage, so a failure leaves the container
/// in its prior state.
///
/// # Errors
///
/// Fails with [`ErrorKind::NilElement`](crate::ErrorKind::NilElement) if any
/// value of the batch is `None`; the error names the offending position.
///
/// # Examples
///
/// ```
/// use sorted_vec::require_present;
///
/// assert_eq!(require_present([Some(1), Some(2)]).unwrap(), vec![1, 2]);
/// assert!(require_present([Some(1), None]).is_err());
/// ```
pub fn require_present<T, I>(batch: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let iter = batch.into_iter();
    let mut present = Vec::with_capacity(iter.size_hint().0);
    for (position, value) in iter.enumerate() {
        match value {
            Some(value) => present.push(value),
            None => return Err(Error::nil_element(position)),
        }
    }
    Ok(present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn all_present_values_pass_through_in_order() {
        let values = require_present(['b', 'a', 'c'].map(Some)).unwrap();
        assert_eq!(values, vec!['b', 'a', 'c']);

        let empty = require_present(std::iter::empty::<Option<u8>>()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn first_absent_value_is_reported_by_position() {
        let err = require_present([Some(1), None, Some(3), None]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NilElement);
        assert!(format!("{err}").contains("position 1"));
    }
}
