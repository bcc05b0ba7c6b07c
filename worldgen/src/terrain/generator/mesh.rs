use std::f32::consts::TAU;

use nalgebra::Vector3;
use terrain_types::coords::Vec3;
use terrain_types::heightmap::HeightmapChunk;
use terrain_types::material::Color;

use crate::config::TerrainConfig;

/// Grid topology, normals and ambient occlusion for a heightmap tile.
#[derive(Clone, Debug)]
pub struct MeshGenerator {
    ao_strength: f32,
    ao_radius: f32,
    ao_samples: usize,
}

impl MeshGenerator {
    pub fn new(config: &TerrainConfig) -> Self {
        Self {
            ao_strength: config.ambient_occlusion_strength,
            ao_radius: config.ambient_occlusion_radius,
            ao_samples: config.ambient_occlusion_samples,
        }
    }

    /// One vertex per grid point, local to the tile origin.
    pub fn grid_vertices(&self, heightmap: &HeightmapChunk) -> Vec<Vec3> {
        let dim = heightmap.resolution() + 1;
        let mut verts = Vec::with_capacity(dim * dim);
        for z in 0..dim {
            for x in 0..dim {
                verts.push(Vec3::new(x as f32, heightmap.get(x, z), z as f32));
            }
        }
        verts
    }

    /// Two triangles per cell, wound so the face normals point up (+y).
    pub fn triangulate(&self, map_size: usize) -> Vec<u32> {
        let row = (map_size + 1) as u32;
        let mut idxs = Vec::with_capacity(map_size * map_size * 6);

        for z in 0..map_size as u32 {
            for x in 0..map_size as u32 {
                let v = z * row + x;
                idxs.extend([v, v + row, v + 1, v + 1, v + row, v + row + 1]);
            }
        }
        idxs
    }

    pub fn grid_uvs(&self, map_size: usize) -> Vec<[f32; 2]> {
        let size = map_size as f32;
        (0..=map_size)
            .flat_map(|z| (0..=map_size).map(move |x| [x as f32 / size, z as f32 / size]))
            .collect()
    }

    /// Area-weighted vertex normals: every triangle adds its raw cross product
    /// to its three corners, then each sum is normalized. A vertex no triangle
    /// touches keeps a zero normal.
    pub fn smooth_normals(&self, verts: &[Vec3], idxs: &[u32]) -> Vec<Vec3> {
        let mut sums = vec![Vector3::<f32>::zeros(); verts.len()];

        for tri in idxs.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = to_vector(verts[a]);
            let pb = to_vector(verts[b]);
            let pc = to_vector(verts[c]);

            let face = (pb - pa).cross(&(pc - pa));
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        }

        sums.into_iter()
            .map(|n| n.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros))
            .map(|n| Vec3::new(n.x, n.y, n.z))
            .collect()
    }

    /// Per-vertex occlusion factor in `[1 - strength, 1]`.
    ///
    /// Samples a ring around each vertex on this tile's own heights; ring
    /// points that fall off the tile read as height 0 and never occlude.
    pub fn ambient_occlusion(&self, heightmap: &HeightmapChunk, verts: &[Vec3]) -> Vec<f32> {
        let ring: Vec<(f32, f32)> = (0..self.ao_samples)
            .map(|j| {
                let angle = j as f32 / self.ao_samples as f32 * TAU;
                (angle.cos() * self.ao_radius, angle.sin() * self.ao_radius)
            })
            .collect();

        verts
            .iter()
            .map(|v| {
                let higher = ring
                    .iter()
                    .filter(|(dx, dz)| {
                        let h = heightmap.interpolate(v.x + dx, v.z + dz).unwrap_or(0.0);
                        h > v.y
                    })
                    .count();
                1.0 - (higher as f32 / self.ao_samples as f32) * self.ao_strength
            })
            .collect()
    }

    pub fn shade(&self, colors: &mut [Color], occlusion: &[f32]) {
        for (color, &ao) in colors.iter_mut().zip(occlusion) {
            *color = color.shaded(ao);
        }
    }
}

fn to_vector(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}
