use terrain_types::coords::ChunkCoords;
use terrain_types::heightmap::HeightmapChunk;

use crate::config::TerrainConfig;
use crate::terrain::generator::NoiseField;

/// Turns a tile's noise-space offset into its vertex heights.
#[derive(Clone, Debug)]
pub struct HeightmapGenerator {
    noise: NoiseField,
    map_size: usize,
    noise_scale: f64,
    octaves: usize,
    persistence: f64,
    lacunarity: f64,
    height_multiplier: f32,
    detail_noise_scale: f64,
    detail_noise_strength: f32,
    detail_noise_offset: f64,
}

impl HeightmapGenerator {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            noise: NoiseField::new(),
            map_size: config.map_size,
            noise_scale: config.noise_scale,
            octaves: config.octaves,
            persistence: config.persistence,
            lacunarity: config.lacunarity,
            height_multiplier: config.height_multiplier,
            detail_noise_scale: config.detail_noise_scale,
            detail_noise_strength: config.detail_noise_strength,
            detail_noise_offset: config.detail_noise_offset,
        }
    }

    /// Heights of every `(map_size + 1)²` grid vertex, row-major along z.
    pub fn generate_chunk(&self, coord: ChunkCoords, offset: [f64; 2]) -> HeightmapChunk {
        let dim = self.map_size + 1;
        let mut heights = Vec::with_capacity(dim * dim);

        for z in 0..dim {
            for x in 0..dim {
                heights.push(self.sample_height(x as f64, z as f64, offset));
            }
        }

        HeightmapChunk::new(coord, self.map_size, heights)
    }

    /// Height of one local grid point.
    ///
    /// The clamp is applied after the detail layer is added, so detail that
    /// would push the surface below zero is cut off at the floor.
    pub fn sample_height(&self, x: f64, z: f64, offset: [f64; 2]) -> f32 {
        let height = self.fractal_height(x, z, offset) + self.detail_noise(x, z, offset);
        height.clamp(0.0, self.height_multiplier)
    }

    fn fractal_height(&self, x: f64, z: f64, offset: [f64; 2]) -> f32 {
        let sample_x = (x + offset[0]) / self.noise_scale;
        let sample_z = (z + offset[1]) / self.noise_scale;
        let normalized = self.noise.fractal_sample(
            sample_x,
            sample_z,
            self.octaves,
            self.persistence,
            self.lacunarity,
        );
        normalized as f32 * self.height_multiplier
    }

    fn detail_noise(&self, x: f64, z: f64, offset: [f64; 2]) -> f32 {
        let sample_x = (x + offset[0] + self.detail_noise_offset) / self.detail_noise_scale;
        let sample_z = (z + offset[1] + self.detail_noise_offset) / self.detail_noise_scale;
        self.noise.sample(sample_x, sample_z) as f32 * self.detail_noise_strength
    }

    pub fn height_multiplier(&self) -> f32 {
        self.height_multiplier
    }
}
