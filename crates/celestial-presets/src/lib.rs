//! Object-type presets for celestial body synthesis.
//!
//! Each [`ObjectType`] maps to an immutable [`ObjectTypePreset`]: the ranges,
//! choice sets and palette the synthesis engine samples from, plus optional
//! sub-blocks and type-specific override blocks.

pub mod blocks;
pub mod object_type;
pub mod preset;
pub mod range;
pub mod table;

#[cfg(test)]
mod table_test;

// Re-export types
pub use blocks::{
    BloomRanges, BumpRanges, FixedCurve, LayeredRock, LightingRanges, LiquidRanges, RockStratum,
    TerrainRanges, TypeOverride,
};
pub use object_type::ObjectType;
pub use preset::{MIN_PALETTE_ANCHORS, ObjectTypePreset, PresetError};
pub use range::Range;
pub use table::{PRESETS, preset_for, preset_named};
