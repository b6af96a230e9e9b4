//! Board-agnostic core logic for the Pebbar watchface
//!
//! This crate contains everything between "a message arrived" and "draw
//! this":
//!
//! - Bounded face data model ([`Layout`], [`Element`])
//! - Message decoder with duplicate suppression
//! - Structural change detection between layouts
//! - [`FaceContext`], which owns the current layout and drives the render
//!   and haptic collaborators
//! - Configuration types
//!
//! Nothing here allocates, blocks or touches hardware.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod context;
pub mod decoder;
pub mod diff;
pub mod layout;
pub mod text;
pub mod traits;

pub use config::FaceConfig;
pub use context::FaceContext;
pub use decoder::{decode, Correction, DecodeOutcome, Decoder, Field};
pub use diff::equal;
pub use layout::{Element, Layout, ICON_CAPACITY, MAX_ELEMENTS, TEXT_CAPACITY};
pub use text::BoundedText;
pub use traits::{Haptics, IconLookup, IconTable, Renderer, ResourceId};
