//! Notification text to face elements

use pebbar_protocol::{DictionaryError, FaceDictionary};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CompanionConfig;
use crate::encode::to_dictionary;
use crate::face::{parse_face, truncate_chars, FaceElement, FaceParseError, MAX_VALUE_CHARS};

/// Errors turning a notification into a watch message
#[derive(Debug, Error)]
pub enum CompanionError {
    #[error(transparent)]
    Face(#[from] FaceParseError),

    /// Dictionary capacity exceeded; only possible with a broken encoder
    #[error("dictionary encoding failed: {0:?}")]
    Dictionary(DictionaryError),
}

impl From<DictionaryError> for CompanionError {
    fn from(e: DictionaryError) -> Self {
        CompanionError::Dictionary(e)
    }
}

/// Face elements for a received notification message
///
/// The message is trimmed and parsed as a face description. If that fails
/// and `config.fallback_to_text` is set, the whole message becomes a single
/// text element instead.
pub fn elements_for_notification(
    message: &str,
    config: &CompanionConfig,
) -> Result<Vec<FaceElement>, FaceParseError> {
    let trimmed = message.trim();
    match parse_face(trimmed) {
        Ok(elements) => Ok(elements),
        Err(e) if config.fallback_to_text => {
            debug!(error = %e, "not face JSON, wrapping as text");
            Ok(vec![FaceElement::text(truncate_chars(trimmed, MAX_VALUE_CHARS))])
        }
        Err(e) => Err(e),
    }
}

/// Watch dictionary for a received notification message
pub fn dictionary_for_notification(
    message: &str,
    config: &CompanionConfig,
) -> Result<FaceDictionary, CompanionError> {
    let elements = elements_for_notification(message, config)?;
    let dict = to_dictionary(&elements, config.schema)?;
    info!(elements = elements.len(), "face message ready for watch");
    Ok(dict)
}
