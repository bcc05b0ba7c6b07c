// src/coords.rs

use serde::{Deserialize, Serialize};

/// Chunk indices on the XZ plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoords {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoords {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Floor-divides a world position by the chunk edge length.
    pub fn from_world(world_x: f32, world_z: f32, chunk_size: u32) -> Self {
        let size = chunk_size as f32;
        Self {
            x: (world_x / size).floor() as i32,
            z: (world_z / size).floor() as i32,
        }
    }

    /// World-space corner of this chunk (y is always 0).
    pub fn origin(&self, chunk_size: u32) -> Vec3 {
        Vec3 {
            x: (self.x as i64 * chunk_size as i64) as f32,
            y: 0.0,
            z: (self.z as i64 * chunk_size as i64) as f32,
        }
    }

    pub fn chebyshev_distance(&self, other: ChunkCoords) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }

    /// Every coordinate in the square of half-width `radius` around `self`,
    /// row by row along z.
    ///
    /// The square is cut off at the edges of the `i32` coordinate space.
    pub fn square(self, radius: u32) -> impl Iterator<Item = ChunkCoords> {
        let (x0, x1) = window(self.x, radius);
        let (z0, z1) = window(self.z, radius);
        (z0..=z1).flat_map(move |z| (x0..=x1).map(move |x| ChunkCoords { x, z }))
    }
}

fn window(center: i32, radius: u32) -> (i32, i32) {
    let (c, r) = (i64::from(center), i64::from(radius));
    let lo = (c - r).max(i64::from(i32::MIN));
    let hi = (c + r).min(i64::from(i32::MAX));
    // both bounds are clamped into i32 range above
    (lo as i32, hi as i32)
}

/// A 3D vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Session-wide offset added to every noise sample coordinate.
///
/// Two sessions with the same seed produce the same terrain for the same
/// chunk coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSeed {
    pub x: f64,
    pub z: f64,
}

impl WorldSeed {
    pub const ZERO: WorldSeed = WorldSeed { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.z == 0.0
    }

    /// Noise-space offset of the tile at `coords`: `seed + coords * chunk_size`.
    pub fn tile_offset(&self, coords: ChunkCoords, chunk_size: u32) -> [f64; 2] {
        [
            self.x + coords.x as f64 * chunk_size as f64,
            self.z + coords.z as f64 * chunk_size as f64,
        ]
    }
}

/// How many world units per edge of a chunk when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 0.0 => ChunkCoords::new(0, 0))]
    #[test_case(99.9, 0.0 => ChunkCoords::new(0, 0))]
    #[test_case(100.0, 250.0 => ChunkCoords::new(1, 2))]
    #[test_case(-0.5, -100.0 => ChunkCoords::new(-1, -1))]
    #[test_case(-100.5, 0.0 => ChunkCoords::new(-2, 0))]
    fn test_from_world_floors(x: f32, z: f32) -> ChunkCoords {
        ChunkCoords::from_world(x, z, 100)
    }

    #[test]
    fn test_square_covers_window() {
        let center = ChunkCoords::new(3, -1);
        let coords: Vec<_> = center.square(2).collect();
        assert_eq!(coords.len(), 25);
        assert!(coords.iter().all(|c| c.chebyshev_distance(center) <= 2));
        assert!(center.square(0).eq(std::iter::once(center)));
    }

    #[test]
    fn test_square_stops_at_coordinate_limits() {
        let corner = ChunkCoords::new(i32::MAX, i32::MIN);
        let coords: Vec<_> = corner.square(2).collect();
        assert_eq!(coords.len(), 9);
        assert!(coords.iter().all(|c| c.x >= i32::MAX - 2 && c.z <= i32::MIN + 2));

        let far = ChunkCoords::from_world(1.0e12, -1.0e12, 100);
        assert_eq!(far, ChunkCoords::new(i32::MAX, i32::MIN));
        assert_eq!(far.square(1).count(), 4);
    }

    #[test]
    fn test_square_with_huge_radius_is_clamped() {
        let mut coords = ChunkCoords::new(0, 0).square(u32::MAX);
        assert_eq!(coords.next(), Some(ChunkCoords::new(i32::MIN, i32::MIN)));
        assert_eq!(coords.next(), Some(ChunkCoords::new(i32::MIN + 1, i32::MIN)));
    }

    #[test]
    fn test_tile_offset_adds_seed() {
        let seed = WorldSeed::new(10.5, -3.0);
        assert_eq!(seed.tile_offset(ChunkCoords::new(2, -1), 100), [210.5, -103.0]);
        assert!(WorldSeed::ZERO.is_zero());
        assert!(!seed.is_zero());
    }
}
