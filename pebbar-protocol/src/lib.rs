//! Pebbar AppMessage protocol
//!
//! This crate defines the keyed dictionary the companion app sends to the
//! watch. A message is a set of tuples, each with a small integer key and a
//! typed value:
//!
//! ```text
//! key 0          count of face elements (u8)
//! key 1 + s*i    element i kind (u8)
//! key 2 + s*i    element i text (cstring, <= 255 bytes)
//! key 3 + s*i    element i icon name (cstring, <= 31 bytes, three-key only)
//! ```
//!
//! where `s` is the stride of the [`Schema`] in use: 2 for the original
//! two-key watchface, 3 for the variant that carries icons.
//!
//! The transport that delivers the tuples is out of scope. Anything that can
//! look up a tuple by key implements [`TupleSource`].

#![no_std]
#![deny(unsafe_code)]

pub mod delivery;
pub mod dictionary;
pub mod keys;
pub mod text;
pub mod tuple;

pub use delivery::DeliveryFailure;
pub use dictionary::{
    Dictionary, DictionaryError, FaceDictionary, OwnedValue, MAX_FACE_TUPLES, MAX_TUPLE_TEXT_LEN,
};
pub use keys::{Schema, KEY_FACE_COUNT, MAX_FACE_ELEMENTS, MAX_ICON_NAME_LEN};
pub use text::truncate_str;
pub use tuple::{Tuple, TupleSource, TupleValue};

/// Inbox buffer size requested when opening AppMessage
///
/// A complete face message, see [`Dictionary::wire_size`], always fits.
pub const INBOX_SIZE: usize = 2048;
