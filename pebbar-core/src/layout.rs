//! Face data model
//!
//! A [`Layout`] is everything the watch shows below the clock: up to
//! [`MAX_ELEMENTS`] slots, each holding a kind, a line of text and an
//! optional icon name.

use pebbar_protocol::{MAX_FACE_ELEMENTS, MAX_ICON_NAME_LEN};

use crate::text::BoundedText;
use crate::traits::{IconLookup, ResourceId};

/// Maximum number of elements in a layout
pub const MAX_ELEMENTS: usize = MAX_FACE_ELEMENTS;

/// Maximum element text length in bytes
pub const TEXT_CAPACITY: usize = 255;

/// Maximum icon name length in bytes
pub const ICON_CAPACITY: usize = MAX_ICON_NAME_LEN;

/// Element display text
pub type ElementText = BoundedText<TEXT_CAPACITY>;

/// Element icon name
pub type IconName = BoundedText<ICON_CAPACITY>;

/// One display slot
///
/// The default element is an inactive slot. A present element always has
/// its kind and text set from the same message; there is no way to build a
/// half-populated one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Element {
    kind: u8,
    text: ElementText,
    icon_name: IconName,
    is_present: bool,
}

impl Element {
    /// Create a present element, truncating text and icon name to capacity
    ///
    /// An empty `icon_name` means no icon. Truncation never splits a
    /// character, so text ending in a multi-byte character that crosses the
    /// capacity comes out shorter than [`TEXT_CAPACITY`].
    pub fn new(kind: u8, text: &str, icon_name: &str) -> Self {
        Self {
            kind,
            text: BoundedText::truncating(text),
            icon_name: BoundedText::truncating(icon_name),
            is_present: true,
        }
    }

    /// Application-defined category (weather, notification, steps, ...)
    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn icon_name(&self) -> &str {
        self.icon_name.as_str()
    }

    /// Whether this slot was populated by a message
    pub fn is_present(&self) -> bool {
        self.is_present
    }

    pub fn has_icon(&self) -> bool {
        !self.icon_name.is_empty()
    }

    /// Resolve the icon resource through `icons`
    pub fn icon<L: IconLookup + ?Sized>(&self, icons: &L) -> Option<ResourceId> {
        if self.has_icon() {
            icons.lookup(self.icon_name())
        } else {
            None
        }
    }

    /// Kind, text and icon match; presence is not compared
    pub fn same_content(&self, other: &Element) -> bool {
        self.kind == other.kind && self.text == other.text && self.icon_name == other.icon_name
    }
}

/// The decoded face
///
/// `count` never exceeds [`MAX_ELEMENTS`] and slots at or above `count` are
/// always inactive.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    count: u8,
    elements: [Element; MAX_ELEMENTS],
}

impl Layout {
    /// Empty layout, as shown at startup
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout with `count` inactive slots, clamped to capacity
    pub fn with_count(count: u8) -> Self {
        Self {
            count: clamp_count(count),
            elements: Default::default(),
        }
    }

    /// Layout holding the given elements in order
    ///
    /// Elements beyond capacity are dropped.
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut layout = Self::new();
        for (slot, element) in layout.elements.iter_mut().zip(elements) {
            *slot = element;
            layout.count += 1;
        }
        layout
    }

    /// Number of declared slots
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Whether no slot is declared
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Element at `index`, if it is below `count`
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.declared().get(index)
    }

    /// Declared slots, present or not
    pub fn declared(&self) -> &[Element] {
        &self.elements[..self.count as usize]
    }

    /// Elements that should be drawn, with their slot index
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.declared()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_present())
    }

    /// Structural equality, see [`crate::diff::equal`]
    pub fn same_content(&self, other: &Layout) -> bool {
        crate::diff::equal(self, other)
    }

    /// Put `element` into slot `index`
    ///
    /// Slots at or above `count` are left alone.
    pub(crate) fn place(&mut self, index: usize, element: Element) {
        if index < self.count as usize {
            self.elements[index] = element;
        }
    }
}

/// Clamp a declared count to layout capacity
pub fn clamp_count(declared: u8) -> u8 {
    declared.min(MAX_ELEMENTS as u8)
}
