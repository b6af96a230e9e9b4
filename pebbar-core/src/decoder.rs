//! Message decoder
//!
//! Turns a keyed message into a [`Layout`]. Only a missing count is fatal;
//! every other malformation is corrected in place:
//!
//! | Problem | Correction |
//! |---|---|
//! | count above capacity | clamped to [`MAX_ELEMENTS`] |
//! | kind or text missing for a slot | slot left inactive, later slots still decoded |
//! | kind not an integer, or text not a string | treated as missing |
//! | byte-array text that is not UTF-8 before its first NUL | treated as missing |
//! | text or icon name too long | truncated on a character boundary, which may drop a few extra bytes |
//!
//! Senders and receivers are updated independently, so a newer phone app
//! talking to an older watchface must degrade, not fail.

use pebbar_protocol::{Schema, TupleSource, KEY_FACE_COUNT};

use crate::diff;
use crate::layout::{clamp_count, Element, ElementText, IconName, Layout, MAX_ELEMENTS};

/// Result of decoding one message
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeOutcome {
    /// New layout to render
    Accepted(Layout),
    /// Message repeats the current layout; nothing to do
    Skipped,
    /// Message has no count and carries nothing actionable
    Rejected,
}

impl DecodeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DecodeOutcome::Accepted(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DecodeOutcome::Skipped)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DecodeOutcome::Rejected)
    }

    /// The accepted layout, if any
    pub fn layout(&self) -> Option<&Layout> {
        match self {
            DecodeOutcome::Accepted(layout) => Some(layout),
            DecodeOutcome::Skipped | DecodeOutcome::Rejected => None,
        }
    }

    pub fn into_layout(self) -> Option<Layout> {
        match self {
            DecodeOutcome::Accepted(layout) => Some(layout),
            DecodeOutcome::Skipped | DecodeOutcome::Rejected => None,
        }
    }
}

/// Which string field was truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Text,
    Icon,
}

/// A malformation that was repaired while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Correction {
    /// Declared count exceeded capacity and was clamped
    OversizedCount { declared: u8 },
    /// Kind or text missing; slot left inactive
    IncompleteElement { index: u8 },
    /// String longer than its slot; truncated
    OversizedString { index: u8, field: Field },
}

/// Element fields as found in a message, before truncation
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawElement<'a> {
    pub kind: u8,
    pub text: &'a str,
    pub icon: Option<&'a str>,
}

/// Read the fields of element `index`
///
/// Returns `None` unless both the kind and the text tuple are present with
/// usable types. The icon is optional.
pub(crate) fn read_element<S: TupleSource + ?Sized>(
    message: &S,
    schema: Schema,
    index: usize,
) -> Option<RawElement<'_>> {
    let kind = message.find(schema.kind_key(index))?.as_u8()?;
    let text = message.find(schema.text_key(index))?.as_text()?;
    let icon = schema
        .icon_key(index)
        .and_then(|key| message.find(key))
        .and_then(|value| value.as_text());
    Some(RawElement { kind, text, icon })
}

/// Face message decoder for one wire schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoder {
    schema: Schema,
}

impl Decoder {
    pub const fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Decode `message`
    ///
    /// With `suppress_duplicates`, a message whose content matches
    /// `previous` yields [`DecodeOutcome::Skipped`] before any layout is
    /// built.
    pub fn decode<S: TupleSource + ?Sized>(
        &self,
        message: &S,
        previous: &Layout,
        suppress_duplicates: bool,
    ) -> DecodeOutcome {
        self.decode_traced(message, previous, suppress_duplicates, |_| {})
    }

    /// Like [`Decoder::decode`], reporting every correction to `on_correction`
    pub fn decode_traced<S, F>(
        &self,
        message: &S,
        previous: &Layout,
        suppress_duplicates: bool,
        mut on_correction: F,
    ) -> DecodeOutcome
    where
        S: TupleSource + ?Sized,
        F: FnMut(Correction),
    {
        let Some(declared) = message.find(KEY_FACE_COUNT).and_then(|v| v.as_u8()) else {
            return DecodeOutcome::Rejected;
        };
        let count = clamp_count(declared);

        if suppress_duplicates && !diff::message_differs(message, self.schema, count, previous) {
            return DecodeOutcome::Skipped;
        }

        if count != declared {
            on_correction(Correction::OversizedCount { declared });
        }

        let mut layout = Layout::with_count(count);
        for index in 0..count as usize {
            // index < MAX_ELEMENTS, fits in u8
            let slot = index as u8;
            let Some(raw) = read_element(message, self.schema, index) else {
                on_correction(Correction::IncompleteElement { index: slot });
                continue;
            };

            if !ElementText::fits(raw.text) {
                on_correction(Correction::OversizedString {
                    index: slot,
                    field: Field::Text,
                });
            }
            let icon = raw.icon.unwrap_or("");
            if !IconName::fits(icon) {
                on_correction(Correction::OversizedString {
                    index: slot,
                    field: Field::Icon,
                });
            }

            layout.place(index, Element::new(raw.kind, raw.text, icon));
        }

        debug_assert!(layout.count() as usize <= MAX_ELEMENTS);
        DecodeOutcome::Accepted(layout)
    }
}

/// Decode `message` with the default [`Schema`]
pub fn decode<S: TupleSource + ?Sized>(
    message: &S,
    previous: &Layout,
    suppress_duplicates: bool,
) -> DecodeOutcome {
    Decoder::default().decode(message, previous, suppress_duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use pebbar_protocol::{Tuple, TupleValue};
    use proptest::prelude::*;

    const TWO_KEY: Decoder = Decoder::new(Schema::TwoKey);
    const THREE_KEY: Decoder = Decoder::new(Schema::ThreeKey);

    fn accepted(outcome: DecodeOutcome) -> Layout {
        match outcome {
            DecodeOutcome::Accepted(layout) => layout,
            other => panic!("expected Accepted, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_count_rejected() {
        let msg = [Tuple::uint8(1, 5), Tuple::cstring(2, "Rain")];
        let previous = Layout::new();
        assert!(TWO_KEY.decode(&msg, &previous, false).is_rejected());
        assert!(TWO_KEY.decode(&msg, &previous, true).is_rejected());
    }

    #[test]
    fn test_non_integer_count_rejected() {
        let msg = [Tuple::cstring(0, "2")];
        assert!(TWO_KEY.decode(&msg, &Layout::new(), false).is_rejected());
    }

    #[test]
    fn test_two_key_example() {
        let msg = [
            Tuple::uint8(0, 2),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain"),
            Tuple::uint8(3, 7),
            Tuple::cstring(4, "Steps: 120"),
        ];
        let layout = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));

        assert_eq!(layout.count(), 2);
        let first = layout.element(0).unwrap();
        assert!(first.is_present());
        assert_eq!(first.kind(), 5);
        assert_eq!(first.text(), "Rain");
        assert_eq!(first.icon_name(), "");
        let second = layout.element(1).unwrap();
        assert_eq!(second.kind(), 7);
        assert_eq!(second.text(), "Steps: 120");
    }

    #[test]
    fn test_three_key_with_icons() {
        let msg = [
            Tuple::uint8(0, 2),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain"),
            Tuple::cstring(3, "rain"),
            Tuple::uint8(4, 7),
            Tuple::cstring(5, "Steps: 120"),
        ];
        let layout = accepted(THREE_KEY.decode(&msg, &Layout::new(), false));

        assert_eq!(layout.element(0).unwrap().icon_name(), "rain");
        assert_eq!(layout.element(1).unwrap().text(), "Steps: 120");
        assert!(!layout.element(1).unwrap().has_icon());
    }

    #[test]
    fn test_count_only_clamped_and_empty() {
        let msg = [Tuple::uint8(0, 6)];
        let mut corrections: Vec<Correction, 8> = Vec::new();
        let layout = accepted(THREE_KEY.decode_traced(&msg, &Layout::new(), false, |c| {
            let _ = corrections.push(c);
        }));

        assert_eq!(layout.count(), 4);
        assert!(layout.declared().iter().all(|e| !e.is_present()));
        assert_eq!(corrections[0], Correction::OversizedCount { declared: 6 });
        assert_eq!(corrections.len(), 5);
        assert_eq!(corrections[4], Correction::IncompleteElement { index: 3 });
    }

    #[test]
    fn test_incomplete_element_does_not_abort() {
        let msg = [
            Tuple::uint8(0, 3),
            // element 0 missing its text
            Tuple::uint8(1, 5),
            // element 1 missing its kind
            Tuple::cstring(4, "orphan"),
            Tuple::uint8(5, 9),
            Tuple::cstring(6, "Third"),
        ];
        let layout = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));

        assert_eq!(layout.count(), 3);
        assert_eq!(*layout.element(0).unwrap(), Element::default());
        assert_eq!(*layout.element(1).unwrap(), Element::default());
        let third = layout.element(2).unwrap();
        assert!(third.is_present());
        assert_eq!(third.kind(), 9);
        assert_eq!(third.text(), "Third");
    }

    #[test]
    fn test_wrong_typed_kind_is_missing() {
        let msg = [
            Tuple::uint8(0, 1),
            Tuple::cstring(1, "5"),
            Tuple::cstring(2, "Rain"),
        ];
        let layout = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));
        assert!(!layout.element(0).unwrap().is_present());
    }

    #[test]
    fn test_two_key_ignores_icon_key() {
        // Key 3 is element 1's kind under the two-key schema, not an icon
        let msg = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain"),
            Tuple::cstring(3, "rain"),
        ];
        let layout = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));
        assert_eq!(layout.element(0).unwrap().icon_name(), "");
    }

    #[test]
    fn test_long_strings_truncated() {
        let text = [b't'; 300];
        let text = core::str::from_utf8(&text).unwrap();
        let icon = [b'i'; 40];
        let icon = core::str::from_utf8(&icon).unwrap();
        let msg = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 1),
            Tuple::cstring(2, text),
            Tuple::cstring(3, icon),
        ];

        let mut corrections: Vec<Correction, 4> = Vec::new();
        let layout = accepted(THREE_KEY.decode_traced(&msg, &Layout::new(), false, |c| {
            let _ = corrections.push(c);
        }));

        let element = layout.element(0).unwrap();
        assert_eq!(element.text().len(), 255);
        assert_eq!(element.icon_name().len(), 31);
        assert_eq!(
            corrections.as_slice(),
            &[
                Correction::OversizedString { index: 0, field: Field::Text },
                Correction::OversizedString { index: 0, field: Field::Icon },
            ]
        );
    }

    #[test]
    fn test_multibyte_char_at_limit_dropped_whole() {
        // 254 ASCII bytes then a two-byte character: 256 bytes in total
        let mut buf = [b'a'; 256];
        buf[254..].copy_from_slice("é".as_bytes());
        let text = core::str::from_utf8(&buf).unwrap();
        let msg = [Tuple::uint8(0, 1), Tuple::uint8(1, 1), Tuple::cstring(2, text)];

        let layout = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));
        let shown = layout.element(0).unwrap().text();
        assert_eq!(shown.len(), 254);
        assert!(shown.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn test_invalid_utf8_bytes_leave_slot_inactive() {
        let msg = [
            Tuple::uint8(0, 2),
            Tuple::uint8(1, 1),
            Tuple {
                key: 2,
                value: TupleValue::Bytes(&[0x52, 0xFF, 0x00]),
            },
            Tuple::uint8(3, 2),
            Tuple::cstring(4, "Wind"),
        ];
        let mut corrections: Vec<Correction, 4> = Vec::new();
        let layout = accepted(TWO_KEY.decode_traced(&msg, &Layout::new(), false, |c| {
            let _ = corrections.push(c);
        }));

        assert!(!layout.element(0).unwrap().is_present());
        assert_eq!(layout.element(1).unwrap().text(), "Wind");
        assert_eq!(
            corrections.as_slice(),
            &[Correction::IncompleteElement { index: 0 }]
        );
    }

    #[test]
    fn test_text_stops_at_nul_and_accepts_bytes() {
        let msg = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 1),
            Tuple {
                key: 2,
                value: TupleValue::Bytes(b"Rain\0\0\0"),
            },
        ];
        let layout = accepted(THREE_KEY.decode(&msg, &Layout::new(), false));
        assert_eq!(layout.element(0).unwrap().text(), "Rain");
    }

    #[test]
    fn test_duplicate_skipped_then_change_accepted() {
        let first = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain"),
        ];
        let current = accepted(TWO_KEY.decode(&first, &Layout::new(), true));
        assert!(TWO_KEY.decode(&first, &current, true).is_skipped());

        let changed = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain, heavy"),
        ];
        let next = accepted(TWO_KEY.decode(&changed, &current, true));
        assert_eq!(next.element(0).unwrap().text(), "Rain, heavy");
    }

    #[test]
    fn test_duplicate_accepted_without_suppression() {
        let msg = [Tuple::uint8(0, 1), Tuple::uint8(1, 5), Tuple::cstring(2, "Rain")];
        let current = accepted(TWO_KEY.decode(&msg, &Layout::new(), false));
        assert!(TWO_KEY.decode(&msg, &current, false).is_accepted());
    }

    #[test]
    fn test_oversized_text_duplicate_is_skipped() {
        let text = [b'r'; 300];
        let text = core::str::from_utf8(&text).unwrap();
        let msg = [Tuple::uint8(0, 1), Tuple::uint8(1, 5), Tuple::cstring(2, text)];
        let current = accepted(TWO_KEY.decode(&msg, &Layout::new(), true));
        assert!(TWO_KEY.decode(&msg, &current, true).is_skipped());
    }

    #[test]
    fn test_free_decode_uses_three_key() {
        let msg = [
            Tuple::uint8(0, 1),
            Tuple::uint8(1, 5),
            Tuple::cstring(2, "Rain"),
            Tuple::cstring(3, "rain"),
        ];
        let layout = decode(&msg, &Layout::new(), false).into_layout().unwrap();
        assert_eq!(layout.element(0).unwrap().icon_name(), "rain");
    }

    proptest! {
        #[test]
        fn prop_count_is_clamped(declared in any::<u8>()) {
            let msg = [Tuple::uint8(0, declared)];
            let layout = THREE_KEY.decode(&msg, &Layout::new(), false).into_layout().unwrap();
            prop_assert_eq!(layout.count() as usize, (declared as usize).min(MAX_ELEMENTS));
        }

        #[test]
        fn prop_ascii_text_length(len in 0usize..400) {
            let mut buf = [b'a'; 400];
            buf[..len].fill(b'b');
            let text = core::str::from_utf8(&buf[..len]).unwrap();
            let msg = [Tuple::uint8(0, 1), Tuple::uint8(1, 0), Tuple::cstring(2, text)];
            let layout = TWO_KEY.decode(&msg, &Layout::new(), false).into_layout().unwrap();
            prop_assert_eq!(layout.element(0).unwrap().text().len(), len.min(255));
        }

        #[test]
        fn prop_repeat_is_skipped(kind in any::<u8>(), text in "[a-z ]{0,40}", icon in "[a-z]{0,10}") {
            let msg = [
                Tuple::uint8(0, 1),
                Tuple::uint8(1, kind),
                Tuple::cstring(2, &text),
                Tuple::cstring(3, &icon),
            ];
            let current = THREE_KEY.decode(&msg, &Layout::new(), true);
            prop_assert!(current.is_accepted());
            let current = current.into_layout().unwrap();
            prop_assert!(THREE_KEY.decode(&msg, &current, true).is_skipped());
        }
    }
}
