//! Typed tuples and key lookup

use crate::text::until_nul;

/// Value carried by a single tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    /// Raw byte array
    Bytes(&'a [u8]),
    /// Null-terminated string (terminator already stripped by the transport)
    CString(&'a str),
    /// Unsigned integer of any width
    Uint(u32),
    /// Signed integer of any width
    Int(i32),
}

impl<'a> TupleValue<'a> {
    /// Read the value as an unsigned byte
    ///
    /// Wider integers keep their low byte, the same as reading the `uint8`
    /// member of the tuple value. Non-integer values yield `None`.
    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            TupleValue::Uint(v) => Some(v as u8),
            TupleValue::Int(v) => Some(v as u8),
            TupleValue::Bytes(_) | TupleValue::CString(_) => None,
        }
    }

    /// Read the value as text
    ///
    /// Text ends at the first NUL. Byte arrays are accepted when that prefix
    /// is valid UTF-8. Integers yield `None`.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            TupleValue::CString(s) => Some(until_nul(s)),
            TupleValue::Bytes(b) => {
                let end = b.iter().position(|&c| c == 0).unwrap_or(b.len());
                core::str::from_utf8(&b[..end]).ok()
            }
            TupleValue::Uint(_) | TupleValue::Int(_) => None,
        }
    }
}

/// A keyed tuple as delivered by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    /// Dictionary key
    pub key: u32,
    /// Typed value
    pub value: TupleValue<'a>,
}

impl<'a> Tuple<'a> {
    pub const fn uint8(key: u32, value: u8) -> Self {
        Self {
            key,
            value: TupleValue::Uint(value as u32),
        }
    }

    pub const fn cstring(key: u32, value: &'a str) -> Self {
        Self {
            key,
            value: TupleValue::CString(value),
        }
    }
}

/// Lookup of tuples by key
///
/// This is the only thing the decoder needs from a message. When a key
/// occurs more than once, the first occurrence wins.
pub trait TupleSource {
    /// Find the tuple stored under `key`
    fn find(&self, key: u32) -> Option<TupleValue<'_>>;
}

impl<'a> TupleSource for [Tuple<'a>] {
    fn find(&self, key: u32) -> Option<TupleValue<'_>> {
        self.iter().find(|t| t.key == key).map(|t| t.value)
    }
}

impl<'a, const N: usize> TupleSource for [Tuple<'a>; N] {
    fn find(&self, key: u32) -> Option<TupleValue<'_>> {
        self.as_slice().find(key)
    }
}

impl<T: TupleSource + ?Sized> TupleSource for &T {
    fn find(&self, key: u32) -> Option<TupleValue<'_>> {
        (**self).find(key)
    }
}
