//! Entry Size Module
//!
//! Measures stored values against the per-entry size limit.

use std::borrow::Cow;
use std::sync::Arc;

// == Entry Size ==
/// Byte size of a value's external representation.
///
/// The cache compares this against its `max_entry_size_bytes` before
/// accepting a write.
pub trait EntrySize {
    fn entry_size(&self) -> usize;
}

impl EntrySize for String {
    fn entry_size(&self) -> usize {
        self.len()
    }
}

impl EntrySize for str {
    fn entry_size(&self) -> usize {
        self.len()
    }
}

impl EntrySize for Vec<u8> {
    fn entry_size(&self) -> usize {
        self.len()
    }
}

impl EntrySize for [u8] {
    fn entry_size(&self) -> usize {
        self.len()
    }
}

impl EntrySize for Box<str> {
    fn entry_size(&self) -> usize {
        self.len()
    }
}

impl<T: EntrySize + ?Sized> EntrySize for &T {
    fn entry_size(&self) -> usize {
        (**self).entry_size()
    }
}

impl<T: EntrySize + ?Sized> EntrySize for Arc<T> {
    fn entry_size(&self) -> usize {
        (**self).entry_size()
    }
}

impl<T: EntrySize + ToOwned + ?Sized> EntrySize for Cow<'_, T> {
    fn entry_size(&self) -> usize {
        self.as_ref().entry_size()
    }
}
