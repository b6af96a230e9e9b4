//! Change detection
//!
//! Decides whether new content differs from what is on screen, so repeated
//! messages cost neither a redraw nor a vibration.

use pebbar_protocol::{truncate_str, Schema, TupleSource};

use crate::decoder::read_element;
use crate::layout::{Layout, ICON_CAPACITY, TEXT_CAPACITY};

/// Structural equality of two layouts
///
/// Counts must match, and every slot below the count must match in kind,
/// text and icon name. Slots at or above the count are not looked at, nor is
/// the presence flag.
pub fn equal(a: &Layout, b: &Layout) -> bool {
    a.count() == b.count()
        && a
            .declared()
            .iter()
            .zip(b.declared())
            .all(|(x, y)| x.same_content(y))
}

/// Whether `message` would change the content of `previous`
///
/// `count` is the already clamped element count of the message. Slots whose
/// kind or text is missing from the message are not compared: they neither
/// prove a change nor end the scan early. Strings are compared after the
/// truncation the decoder would apply, and a missing icon compares as empty.
pub(crate) fn message_differs<S: TupleSource + ?Sized>(
    message: &S,
    schema: Schema,
    count: u8,
    previous: &Layout,
) -> bool {
    if count != previous.count() {
        return true;
    }

    previous
        .declared()
        .iter()
        .enumerate()
        .any(|(index, old)| match read_element(message, schema, index) {
            Some(raw) => {
                let icon = truncate_str(raw.icon.unwrap_or(""), ICON_CAPACITY);
                old.kind() != raw.kind
                    || old.text() != truncate_str(raw.text, TEXT_CAPACITY)
                    || old.icon_name() != icon
            }
            None => false,
        })
}
