//! Floating record-disc display for jukebox blocks.
//!
//! Scans the chunks around the observer for jukeboxes carrying a record,
//! then rebuilds an edge-outlined, extruded disc sprite and a glass
//! enclosure above each one every frame. The host engine supplies world
//! access, texture data, and draw submission through the traits in
//! [`world`], [`texture`], and [`render`]; this crate owns the per-tick
//! scan and the per-frame geometry synthesis.

pub mod mesh;
pub mod outline;
pub mod plugin;
pub mod render;
pub mod scanner;
pub mod tag;
pub mod texture;
pub mod world;

pub use plugin::{JukeboxVisuals, VisualConfig};
