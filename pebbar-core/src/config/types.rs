//! Configuration type definitions

use pebbar_protocol::Schema;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decoder::Decoder;

/// Watchface configuration
///
/// The two wire schemas come from different builds of the companion app and
/// are never mixed at runtime, so the schema is picked here once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Element key layout expected from the companion
    pub schema: Schema,
    /// Skip redraw and vibration when a message repeats the current face
    pub suppress_duplicates: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            schema: Schema::ThreeKey,
            suppress_duplicates: true,
        }
    }
}

impl FaceConfig {
    /// Configuration of the original two-key watchface
    pub const fn two_key() -> Self {
        Self {
            schema: Schema::TwoKey,
            suppress_duplicates: false,
        }
    }

    /// Decoder for the configured schema
    pub const fn decoder(&self) -> Decoder {
        Decoder::new(self.schema)
    }
}
