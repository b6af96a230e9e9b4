//! Owned, fixed-capacity tuple dictionary
//!
//! Transports hand out tuples that borrow a transient receive buffer. When a
//! message has to outlive that buffer, or when a message is built on the
//! sending side, its tuples are copied into a [`Dictionary`].

use heapless::{String, Vec};

use crate::keys::{Schema, MAX_FACE_ELEMENTS};
use crate::tuple::{Tuple, TupleSource, TupleValue};

/// Maximum text length of a single owned tuple, in bytes
pub const MAX_TUPLE_TEXT_LEN: usize = 255;

/// Number of tuples in the largest face message
pub const MAX_FACE_TUPLES: usize = Schema::ThreeKey.tuple_count(MAX_FACE_ELEMENTS);

/// Dictionary sized for one complete face message
pub type FaceDictionary = Dictionary<MAX_FACE_TUPLES>;

/// Errors that can occur while filling a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictionaryError {
    /// No free entry left
    Full,
    /// Text value exceeds [`MAX_TUPLE_TEXT_LEN`]
    ValueTooLong,
}

/// Owned tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OwnedValue {
    Uint(u32),
    Int(i32),
    CString(String<MAX_TUPLE_TEXT_LEN>),
}

/// Dictionary header: tuple count
const DICT_HEADER_SIZE: usize = 1;

/// Tuple header: key, type and length
const TUPLE_HEADER_SIZE: usize = 7;

impl OwnedValue {
    /// Encoded value length; integers are counted at full width
    fn wire_len(&self) -> usize {
        match self {
            OwnedValue::Uint(_) | OwnedValue::Int(_) => 4,
            // Terminator included
            OwnedValue::CString(s) => s.len() + 1,
        }
    }

    fn as_tuple_value(&self) -> TupleValue<'_> {
        match self {
            OwnedValue::Uint(v) => TupleValue::Uint(*v),
            OwnedValue::Int(v) => TupleValue::Int(*v),
            OwnedValue::CString(s) => TupleValue::CString(s.as_str()),
        }
    }
}

/// Keyed tuples with room for `N` entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary<const N: usize> {
    entries: Vec<(u32, OwnedValue), N>,
}

impl<const N: usize> Dictionary<N> {
    /// Create an empty dictionary
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Copy every tuple from `tuples`
    pub fn from_tuples<'a>(
        tuples: impl IntoIterator<Item = Tuple<'a>>,
    ) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();
        for tuple in tuples {
            let value = match tuple.value {
                TupleValue::Uint(v) => OwnedValue::Uint(v),
                TupleValue::Int(v) => OwnedValue::Int(v),
                TupleValue::CString(_) | TupleValue::Bytes(_) => {
                    // Bytes that are not text are not carried by face messages
                    let Some(text) = tuple.value.as_text() else {
                        continue;
                    };
                    OwnedValue::CString(to_owned_text(text)?)
                }
            };
            dict.insert(tuple.key, value)?;
        }
        Ok(dict)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn insert(&mut self, key: u32, value: OwnedValue) -> Result<(), DictionaryError> {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return Ok(());
        }
        self.entries
            .push((key, value))
            .map_err(|_| DictionaryError::Full)
    }

    /// Store an unsigned byte
    pub fn insert_u8(&mut self, key: u32, value: u8) -> Result<(), DictionaryError> {
        self.insert(key, OwnedValue::Uint(value as u32))
    }

    /// Store a string
    ///
    /// Fails with [`DictionaryError::ValueTooLong`] rather than truncating.
    pub fn insert_cstring(&mut self, key: u32, value: &str) -> Result<(), DictionaryError> {
        self.insert(key, OwnedValue::CString(to_owned_text(value)?))
    }

    /// Remove the value under `key`, if any
    pub fn remove(&mut self, key: u32) -> Option<OwnedValue> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.swap_remove(pos).1)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored tuples
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tuple is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes this dictionary takes up in an AppMessage buffer
    pub fn wire_size(&self) -> usize {
        DICT_HEADER_SIZE
            + self
                .entries
                .iter()
                .map(|(_, value)| TUPLE_HEADER_SIZE + value.wire_len())
                .sum::<usize>()
    }

    /// Iterate over the stored tuples
    pub fn tuples(&self) -> impl Iterator<Item = Tuple<'_>> {
        self.entries.iter().map(|(key, value)| Tuple {
            key: *key,
            value: value.as_tuple_value(),
        })
    }
}

impl<const N: usize> TupleSource for Dictionary<N> {
    fn find(&self, key: u32) -> Option<TupleValue<'_>> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_tuple_value())
    }
}

fn to_owned_text(text: &str) -> Result<String<MAX_TUPLE_TEXT_LEN>, DictionaryError> {
    let mut owned = String::new();
    owned
        .push_str(text)
        .map_err(|_| DictionaryError::ValueTooLong)?;
    Ok(owned)
}
