//! Skystrike: a neon vertical-scrolling arcade shooter.
//!
//! The library holds everything the binary does not draw: pure-data entity
//! types, the per-frame simulation in [`compute`], visual-effect state,
//! the asset cache, and the input snapshot. The binary owns the window,
//! the outer frame loop, and the rendering layer.

pub mod assets;
pub mod compute;
pub mod effects;
pub mod entities;
pub mod input;
pub mod palette;
