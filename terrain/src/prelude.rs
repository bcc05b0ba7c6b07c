// terrain/src/prelude.rs
//! A convenient prelude re-exporting common terrain types.

pub use crate::biome::BiomeLabel;
pub use crate::coords::{ChunkCoords, Vec3, WorldSeed};
pub use crate::heightmap::HeightmapChunk;
pub use crate::material::{Color, MaterialDefinition, MaterialId};
pub use crate::mesh::MeshChunk;
