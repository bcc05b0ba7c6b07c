// src/mesh.rs

use crate::biome::BiomeLabel;
use crate::coords::{ChunkCoords, Vec3};
use crate::material::{Color, MaterialId};

/// Finished geometry of one tile, handed to renderers read-only.
///
/// Every per-vertex array has the same length; `indices` is a triangle list.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshChunk {
    pub coord: ChunkCoords,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<[f32; 2]>,
    pub colors: Vec<Color>,
    pub biomes: Vec<BiomeLabel>,
    pub materials: Vec<MaterialId>,
    pub indices: Vec<u32>,
}

impl MeshChunk {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}
