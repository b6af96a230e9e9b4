//! Face elements to watch dictionary

use pebbar_protocol::{
    truncate_str, DictionaryError, FaceDictionary, Schema, KEY_FACE_COUNT, MAX_FACE_ELEMENTS,
    MAX_ICON_NAME_LEN, MAX_TUPLE_TEXT_LEN,
};

use crate::face::FaceElement;

/// Encode `elements` with the key numbering of `schema`
///
/// At most [`MAX_FACE_ELEMENTS`] elements are sent. Under the three-key
/// schema every element carries an icon tuple, empty when it has no icon.
/// Icon names are cut to what the watch keeps, so a full face always fits
/// the watch inbox.
pub fn to_dictionary(
    elements: &[FaceElement],
    schema: Schema,
) -> Result<FaceDictionary, DictionaryError> {
    let elements = &elements[..elements.len().min(MAX_FACE_ELEMENTS)];
    let mut dict = FaceDictionary::new();

    // Bounded by MAX_FACE_ELEMENTS above
    dict.insert_u8(KEY_FACE_COUNT, elements.len() as u8)?;

    for (i, elem) in elements.iter().enumerate() {
        dict.insert_u8(schema.kind_key(i), elem.kind)?;
        dict.insert_cstring(
            schema.text_key(i),
            truncate_str(&elem.value, MAX_TUPLE_TEXT_LEN),
        )?;
        if let Some(icon_key) = schema.icon_key(i) {
            dict.insert_cstring(icon_key, truncate_str(&elem.icon, MAX_ICON_NAME_LEN))?;
        }
    }

    tracing::trace!(tuples = dict.len(), ?schema, "encoded face dictionary");
    Ok(dict)
}
