use crate::config::TerrainConfig;
use crate::terrain::generator::HeightmapGenerator;
use approx::assert_relative_eq;
use terrain_types::coords::ChunkCoords;
use test_case::test_case;

const OFFSET: [f64; 2] = [1234.5, -678.25];

fn config(map_size: usize) -> TerrainConfig {
    TerrainConfig {
        map_size,
        ..TerrainConfig::default()
    }
}

#[test_case(1)]
#[test_case(4)]
#[test_case(16)]
fn test_heightmap_dimensions(map_size: usize) {
    let generator = HeightmapGenerator::new(&config(map_size));
    let heights = generator.generate_chunk(ChunkCoords::default(), OFFSET);

    assert_eq!(heights.resolution(), map_size);
    assert_eq!(heights.heights().len(), (map_size + 1) * (map_size + 1));
}

#[test]
fn test_height_range() {
    let cfg = config(32);
    let generator = HeightmapGenerator::new(&cfg);
    let heights = generator.generate_chunk(ChunkCoords::default(), OFFSET);

    for &height in heights.heights() {
        assert!(height >= 0.0);
        assert!(height <= cfg.height_multiplier);
    }
}

#[test]
fn test_clamp_applies_after_detail() {
    let cfg = TerrainConfig {
        map_size: 16,
        height_multiplier: 10.0,
        detail_noise_scale: 3.0,
        detail_noise_strength: 10_000.0,
        ..TerrainConfig::default()
    };
    let generator = HeightmapGenerator::new(&cfg);
    let heights = generator.generate_chunk(ChunkCoords::default(), OFFSET);

    // detail this strong saturates both ends of the clamp
    assert!(heights.heights().iter().any(|&h| h == 0.0));
    assert!(heights.heights().iter().any(|&h| h == 10.0));
    assert!(heights.heights().iter().all(|&h| (0.0..=10.0).contains(&h)));
}

#[test_case([100.0, 0.0])]
#[test_case([0.0, 100.0])]
#[test_case([-100.0, -100.0])]
fn test_offset_affects_heights(delta: [f64; 2]) {
    let generator = HeightmapGenerator::new(&config(64));
    let other = [OFFSET[0] + delta[0], OFFSET[1] + delta[1]];

    let heights1 = generator.generate_chunk(ChunkCoords::default(), OFFSET);
    let heights2 = generator.generate_chunk(ChunkCoords::default(), other);

    assert!(heights1.heights() != heights2.heights(), "Heights should differ for different offsets");
}

#[test]
fn test_height_continuity() {
    let map_size = 16;
    let generator = HeightmapGenerator::new(&config(map_size));
    let next = [OFFSET[0] + map_size as f64, OFFSET[1]];

    let heights1 = generator.generate_chunk(ChunkCoords::new(0, 0), OFFSET);
    let heights2 = generator.generate_chunk(ChunkCoords::new(1, 0), next);

    // the last column of one tile is the first column of its +x neighbor
    for z in 0..=map_size {
        assert_relative_eq!(heights1.get(map_size, z), heights2.get(0, z), epsilon = 1e-3);
    }
}

#[test]
fn test_offset_determinism() {
    let generator1 = HeightmapGenerator::new(&config(16));
    let generator2 = HeightmapGenerator::new(&config(16));

    let heights1 = generator1.generate_chunk(ChunkCoords::default(), OFFSET);
    let heights2 = generator2.generate_chunk(ChunkCoords::default(), OFFSET);

    assert_eq!(heights1, heights2, "Same offset should produce identical heights");
}
