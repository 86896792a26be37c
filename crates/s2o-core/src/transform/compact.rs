//! The single emptiness rule shared by every mapper: a value that is an
//! empty string, an empty collection or absent is left out of the
//! emitted object.

use indexmap::IndexMap;

pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for IndexMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(|v| v.is_empty_value())
    }
}

/// `None` when the value is absent or empty, the value otherwise.
pub fn omit_empty<T: IsEmpty>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.is_empty_value())
}

/// Shorthand for values that are always present in the candidate object.
pub fn non_empty<T: IsEmpty>(value: T) -> Option<T> {
    omit_empty(Some(value))
}
