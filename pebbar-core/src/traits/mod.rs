//! Collaborator traits
//!
//! The core never draws, vibrates or loads resources itself. Platform glue
//! implements these traits and hands them to [`crate::FaceContext`].

pub mod icon;
pub mod render;

pub use icon::{IconLookup, IconTable, ResourceId};
pub use render::{Haptics, Renderer};
