//! Wildmarch - procedural overworld and fog-of-war core
//!
//! Generates a biome-labeled tile world from seeded gradient noise and
//! answers per-tile visibility queries for the host game loop. The host
//! owns rendering and input; this crate only exposes the world data.

pub mod player;
pub mod world;

// Re-export commonly used types
pub use player::{Player, Stats};
pub use world::{
    visibility_of, BiomeType, Grid, Position, Tile, Visibility, VisibilityField, WorldError,
};
