//! Companion side of the Pebbar watchface
//!
//! Runs on the phone. Incoming notification text is either a face
//! description in JSON:
//!
//! ```json
//! {"face": [{"type": "text", "value": "Rain", "icon": "rain"}]}
//! ```
//!
//! or plain text, which becomes a single text element. The elements are then
//! encoded into the keyed dictionary the watch decodes.

pub mod config;
pub mod encode;
pub mod face;
pub mod notification;

pub use config::{CompanionConfig, CompanionConfigError};
pub use encode::to_dictionary;
pub use face::{parse_face, wrap_quick_text, FaceElement, FaceParseError, KIND_TEXT};
pub use notification::{dictionary_for_notification, elements_for_notification, CompanionError};
