// src/heightmap.rs

use crate::coords::ChunkCoords;

/// Dense `(resolution + 1)²` grid of vertex heights for one tile, row-major
/// along z.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightmapChunk {
    pub coord: ChunkCoords,
    resolution: usize,
    heights: Vec<f32>,
}

impl HeightmapChunk {
    pub fn new(coord: ChunkCoords, resolution: usize, heights: Vec<f32>) -> Self {
        assert!(resolution > 0, "heightmap resolution must be positive");
        assert_eq!(heights.len(), (resolution + 1) * (resolution + 1));
        Self { coord, resolution, heights }
    }

    /// Cells per edge; the grid has one more vertex than this per edge.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn get(&self, x: usize, z: usize) -> f32 {
        self.heights[z * (self.resolution + 1) + x]
    }

    /// Bilinear height at a local position, or `None` outside `[0, resolution]²`.
    ///
    /// The far edge is served by the last cell with a fractional offset of 1,
    /// so every grid vertex reads back its exact stored height.
    pub fn interpolate(&self, local_x: f32, local_z: f32) -> Option<f32> {
        let max = self.resolution as f32;
        if !(0.0..=max).contains(&local_x) || !(0.0..=max).contains(&local_z) {
            return None;
        }

        let x = (local_x.floor() as usize).min(self.resolution - 1);
        let z = (local_z.floor() as usize).min(self.resolution - 1);
        let u = local_x - x as f32;
        let v = local_z - z as f32;

        let h00 = self.get(x, z);
        let h10 = self.get(x + 1, z);
        let h01 = self.get(x, z + 1);
        let h11 = self.get(x + 1, z + 1);

        let h0 = lerp(h00, h10, u);
        let h1 = lerp(h01, h11, u);
        Some(lerp(h0, h1, v))
    }
}

// weighted form so t = 0 and t = 1 return the endpoints exactly
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(resolution: usize) -> HeightmapChunk {
        let mut heights = Vec::new();
        for z in 0..=resolution {
            for x in 0..=resolution {
                heights.push(x as f32 + 10.0 * z as f32);
            }
        }
        HeightmapChunk::new(ChunkCoords::default(), resolution, heights)
    }

    #[test]
    fn test_interpolate_matches_vertices() {
        let map = ramp(4);
        for z in 0..=4 {
            for x in 0..=4 {
                assert_eq!(map.interpolate(x as f32, z as f32), Some(map.get(x, z)));
            }
        }
    }

    #[test]
    fn test_interpolate_is_linear_on_a_ramp() {
        let map = ramp(4);
        let h = map.interpolate(1.25, 2.5).unwrap();
        assert_relative_eq!(h, 1.25 + 25.0, epsilon = 1e-5);
    }

    #[test]
    fn test_interpolate_outside_is_none() {
        let map = ramp(4);
        assert_eq!(map.interpolate(-0.01, 1.0), None);
        assert_eq!(map.interpolate(1.0, 4.01), None);
        assert_eq!(map.interpolate(f32::NAN, 1.0), None);
    }
}
