// src/terrain/chunk.rs

use log::debug;
use terrain_types::biome::BiomeLabel;
use terrain_types::coords::{ChunkCoords, Vec3};
use terrain_types::heightmap::HeightmapChunk;
use terrain_types::material::Color;
use terrain_types::mesh::MeshChunk;

use crate::config::TerrainConfig;
use crate::error::Result;
use crate::terrain::generator::{BiomeClassifier, HeightmapGenerator, MeshGenerator};

/// Geometry of one chunk: heights, triangulated surface, biome colors.
///
/// A tile is empty until the first [`build`](Self::build); each build
/// replaces all of its arrays at once.
#[derive(Clone, Debug)]
pub struct TerrainTile {
    coords: ChunkCoords,
    origin: Vec3,
    heightmap: Option<HeightmapChunk>,
    mesh: Option<MeshChunk>,
}

impl TerrainTile {
    pub fn new(coords: ChunkCoords, origin: Vec3) -> Self {
        Self {
            coords,
            origin,
            heightmap: None,
            mesh: None,
        }
    }

    /// Creates and builds a tile in one step.
    pub fn generate(
        coords: ChunkCoords,
        origin: Vec3,
        config: &TerrainConfig,
        classifier: &BiomeClassifier,
        offset: [f64; 2],
    ) -> Result<Self> {
        let mut tile = Self::new(coords, origin);
        tile.build(config, classifier, offset)?;
        Ok(tile)
    }

    /// Full, deterministic rebuild from `config` at noise-space `offset`.
    ///
    /// Fails without touching the current geometry if `config` is invalid.
    pub fn build(
        &mut self,
        config: &TerrainConfig,
        classifier: &BiomeClassifier,
        offset: [f64; 2],
    ) -> Result<()> {
        config.validate()?;

        let heightmap = HeightmapGenerator::new(config).generate_chunk(self.coords, offset);
        let mesh_generator = MeshGenerator::new(config);
        let map_size = heightmap.resolution();

        let vertices = mesh_generator.grid_vertices(&heightmap);
        let indices = mesh_generator.triangulate(map_size);
        let uvs = mesh_generator.grid_uvs(map_size);

        let biomes: Vec<BiomeLabel> = vertices
            .iter()
            .map(|v| {
                let world = Vec3::new(self.origin.x + v.x, self.origin.y + v.y, self.origin.z + v.z);
                classifier.classify(world, v.y / config.height_multiplier)
            })
            .collect();
        let mut colors: Vec<Color> = biomes.iter().map(|&b| classifier.color_of(b)).collect();

        let normals = mesh_generator.smooth_normals(&vertices, &indices);

        // heights are final here; occlusion reads them through the unpublished heightmap
        let occlusion = mesh_generator.ambient_occlusion(&heightmap, &vertices);
        mesh_generator.shade(&mut colors, &occlusion);

        let materials = biomes.iter().map(|b| b.id()).collect();

        debug!(
            "Built tile {:?}: {} vertices, {} triangles",
            self.coords,
            vertices.len(),
            indices.len() / 3
        );

        self.mesh = Some(MeshChunk {
            coord: self.coords,
            vertices,
            normals,
            uvs,
            colors,
            biomes,
            materials,
            indices,
        });
        self.heightmap = Some(heightmap);
        Ok(())
    }

    /// Interpolated terrain height under a world position.
    ///
    /// Returns 0 outside this tile's footprint and before the first build;
    /// callers that need to tell those apart go through the streamer.
    pub fn height_at(&self, world: Vec3) -> f32 {
        self.local_height(world.x - self.origin.x, world.z - self.origin.z)
    }

    /// Same as [`height_at`](Self::height_at) with tile-local coordinates.
    pub fn local_height(&self, local_x: f32, local_z: f32) -> f32 {
        self.heightmap
            .as_ref()
            .and_then(|map| map.interpolate(local_x, local_z))
            .unwrap_or(0.0)
    }

    pub fn contains(&self, world: Vec3) -> bool {
        let Some(map) = &self.heightmap else {
            return false;
        };
        let size = map.resolution() as f32;
        let (lx, lz) = (world.x - self.origin.x, world.z - self.origin.z);
        (0.0..=size).contains(&lx) && (0.0..=size).contains(&lz)
    }

    pub fn is_built(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn coords(&self) -> ChunkCoords {
        self.coords
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn mesh(&self) -> Option<&MeshChunk> {
        self.mesh.as_ref()
    }

    pub fn heightmap(&self) -> Option<&HeightmapChunk> {
        self.heightmap.as_ref()
    }
}
