//! Key numbering for face messages
//!
//! Keys are positional: element `i` owns a fixed run of keys starting right
//! after the count key. The numbering must match the companion sender
//! exactly, so it lives here and nowhere else.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key carrying the number of face elements
pub const KEY_FACE_COUNT: u32 = 0;

/// Maximum number of face elements the watch can hold
pub const MAX_FACE_ELEMENTS: usize = 4;

/// Longest icon name the watch keeps, in bytes
pub const MAX_ICON_NAME_LEN: usize = 31;

/// Wire layout of the per-element keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Schema {
    /// Kind and text per element (`1 + 2i`, `2 + 2i`)
    TwoKey,
    /// Kind, text and icon name per element (`1 + 3i`, `2 + 3i`, `3 + 3i`)
    #[default]
    ThreeKey,
}

impl Schema {
    /// Number of keys used by each element
    pub const fn stride(self) -> u32 {
        match self {
            Schema::TwoKey => 2,
            Schema::ThreeKey => 3,
        }
    }

    /// Key of the kind tuple for element `index`
    pub const fn kind_key(self, index: usize) -> u32 {
        1 + index as u32 * self.stride()
    }

    /// Key of the text tuple for element `index`
    pub const fn text_key(self, index: usize) -> u32 {
        2 + index as u32 * self.stride()
    }

    /// Key of the icon tuple for element `index`
    ///
    /// Returns `None` for [`Schema::TwoKey`], which has no icon field.
    pub const fn icon_key(self, index: usize) -> Option<u32> {
        match self {
            Schema::TwoKey => None,
            Schema::ThreeKey => Some(3 + index as u32 * 3),
        }
    }

    /// Whether this schema carries icon names
    pub const fn has_icons(self) -> bool {
        matches!(self, Schema::ThreeKey)
    }

    /// Number of tuples in a full message with `count` elements
    pub const fn tuple_count(self, count: usize) -> usize {
        1 + count * self.stride() as usize
    }
}
