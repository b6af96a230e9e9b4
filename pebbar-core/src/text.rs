//! Byte-bounded text storage
//!
//! Replaces fixed `char[N]` buffers. The capacity is part of the type, the
//! only way in is a truncating constructor, and the stored text is always
//! valid UTF-8 with a known length.

use core::fmt;
use core::ops::Deref;

use heapless::String;
use pebbar_protocol::truncate_str;

/// Text holding at most `N` bytes
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BoundedText<const N: usize> {
    inner: String<N>,
}

impl<const N: usize> BoundedText<N> {
    /// Maximum length in bytes
    pub const CAPACITY: usize = N;

    /// Create empty text
    pub const fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Copy `s`, cutting it at the last character boundary that fits
    ///
    /// ASCII text keeps exactly `min(len, N)` bytes. A multi-byte character
    /// crossing the limit is dropped whole, so the result can be a few bytes
    /// shorter than `N`.
    pub fn truncating(s: &str) -> Self {
        let mut inner = String::new();
        // Cannot fail: the slice is at most N bytes
        let _ = inner.push_str(truncate_str(s, N));
        Self { inner }
    }

    /// Whether `s` would be stored without truncation
    pub fn fits(s: &str) -> bool {
        s.len() <= N
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Bytes of the text followed by a single NUL terminator
    ///
    /// For collaborators that expect C strings. Never yields more than
    /// `N + 1` bytes.
    pub fn c_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.inner.bytes().chain(core::iter::once(0))
    }
}

impl<const N: usize> Deref for BoundedText<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedText<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq<str> for BoundedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for BoundedText<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}
