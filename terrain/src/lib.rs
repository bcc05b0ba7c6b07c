// src/lib.rs

//! Shared terrain domain types.
//! The generator crate builds tiles out of these; renderers and other
//! consumers only ever read them.

pub mod biome;
pub mod coords;
pub mod heightmap;
pub mod material;
pub mod mesh;
pub mod prelude;
