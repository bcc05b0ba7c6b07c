// src/config.rs

use std::fs;
use std::path::Path;

use log::info;
use rand::Rng;
use serde::Deserialize;
use terrain_types::biome::BiomeLabel;
use terrain_types::coords::{WorldSeed, DEFAULT_CHUNK_SIZE};
use terrain_types::material::Color;

use crate::error::{Result, WorldError};

/// Half-width of the range a random world seed is drawn from.
const SEED_RANGE: f64 = 10_000.0;

/// Session configuration, fixed for the lifetime of a streamer unless the
/// terrain section is explicitly swapped via `ChunkStreamer::reconfigure_terrain`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldConfig {
    /// Zero means "draw a random seed when the session starts".
    #[serde(default)]
    pub world_seed_offset: [f64; 2],
    #[serde(default)]
    pub streaming: StreamingConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub biome: BiomeConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamingConfig {
    pub chunk_size: u32,
    pub view_distance: u32,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            view_distance: 2,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainConfig {
    /// Grid cells per tile edge.
    pub map_size: usize,
    pub noise_scale: f64,
    pub octaves: usize,
    pub persistence: f64,
    pub lacunarity: f64,
    pub height_multiplier: f32,
    pub detail_noise_scale: f64,
    pub detail_noise_strength: f32,
    pub detail_noise_offset: f64,
    pub ambient_occlusion_strength: f32,
    pub ambient_occlusion_radius: f32,
    pub ambient_occlusion_samples: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_CHUNK_SIZE as usize,
            noise_scale: 50.0,
            octaves: 6,
            persistence: 0.6,
            lacunarity: 2.0,
            height_multiplier: 30.0,
            detail_noise_scale: 100.0,
            detail_noise_strength: 5.0,
            detail_noise_offset: 1000.0,
            ambient_occlusion_strength: 0.5,
            ambient_occlusion_radius: 1.0,
            ambient_occlusion_samples: 8,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.map_size == 0 {
            return Err(WorldError::invalid("terrain.map_size", "must be greater than zero"));
        }
        if self.octaves == 0 {
            return Err(WorldError::invalid("terrain.octaves", "must be greater than zero"));
        }
        if self.ambient_occlusion_samples == 0 {
            return Err(WorldError::invalid(
                "terrain.ambient_occlusion_samples",
                "must be greater than zero",
            ));
        }
        positive("terrain.noise_scale", self.noise_scale)?;
        positive("terrain.detail_noise_scale", self.detail_noise_scale)?;
        positive("terrain.height_multiplier", self.height_multiplier as f64)?;
        Ok(())
    }

    /// A tile's grid must span exactly one chunk, otherwise tiles leave gaps
    /// or overlap their neighbours.
    pub fn check_tile_grid(&self, chunk_size: u32) -> Result<()> {
        if self.map_size != chunk_size as usize {
            return Err(WorldError::invalid(
                "terrain.map_size",
                format!(
                    "must equal streaming.chunk_size ({chunk_size}), got {}",
                    self.map_size
                ),
            ));
        }
        Ok(())
    }
}

/// Color and texture of a single biome.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiomeStyle {
    pub color: Color,
    #[serde(default)]
    pub texture: Option<String>,
}

impl BiomeStyle {
    fn new(color: Color, texture: Option<&str>) -> Self {
        Self { color, texture: texture.map(str::to_owned) }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BiomeConfig {
    pub temperature_scale: f64,
    pub moisture_scale: f64,
    /// Extra offset applied to moisture samples so they decorrelate from temperature.
    pub moisture_offset: f64,
    pub snow_threshold: f32,
    pub mountain_threshold: f32,
    pub desert_threshold: f32,
    pub forest_threshold: f32,
    pub plains: BiomeStyle,
    pub forest: BiomeStyle,
    pub desert: BiomeStyle,
    pub mountain: BiomeStyle,
    pub snow: BiomeStyle,
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            temperature_scale: 100.0,
            moisture_scale: 100.0,
            moisture_offset: 1000.0,
            snow_threshold: 0.7,
            mountain_threshold: 0.5,
            desert_threshold: 0.7,
            forest_threshold: 0.6,
            plains: BiomeStyle::new(Color::rgb(0.2, 0.8, 0.2), Some("plains")),
            forest: BiomeStyle::new(Color::rgb(0.1, 0.5, 0.1), Some("forest")),
            desert: BiomeStyle::new(Color::rgb(0.76, 0.7, 0.5), Some("desert")),
            mountain: BiomeStyle::new(Color::rgb(0.5, 0.5, 0.5), Some("mountain")),
            snow: BiomeStyle::new(Color::rgb(1.0, 1.0, 1.0), None),
        }
    }
}

impl BiomeConfig {
    pub fn style(&self, label: BiomeLabel) -> &BiomeStyle {
        match label {
            BiomeLabel::Plains => &self.plains,
            BiomeLabel::Forest => &self.forest,
            BiomeLabel::Desert => &self.desert,
            BiomeLabel::Mountain => &self.mountain,
            BiomeLabel::Snow => &self.snow,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("biome.temperature_scale", self.temperature_scale)?;
        positive("biome.moisture_scale", self.moisture_scale)?;
        unit("biome.snow_threshold", self.snow_threshold)?;
        unit("biome.mountain_threshold", self.mountain_threshold)?;
        unit("biome.desert_threshold", self.desert_threshold)?;
        unit("biome.forest_threshold", self.forest_threshold)?;
        Ok(())
    }
}

impl WorldConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: WorldConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        info!("Loaded world config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.streaming.chunk_size == 0 {
            return Err(WorldError::invalid("streaming.chunk_size", "must be greater than zero"));
        }
        if self.world_seed_offset.iter().any(|v| !v.is_finite()) {
            return Err(WorldError::invalid("world_seed_offset", "must be finite"));
        }
        self.terrain.validate()?;
        self.terrain.check_tile_grid(self.streaming.chunk_size)?;
        self.biome.validate()?;
        Ok(())
    }

    /// The configured seed, or a fresh random one when the offset is zero.
    pub fn resolve_seed<R: Rng>(&self, rng: &mut R) -> WorldSeed {
        let [x, z] = self.world_seed_offset;
        let seed = WorldSeed::new(x, z);
        if !seed.is_zero() {
            return seed;
        }
        WorldSeed::new(
            rng.gen_range(-SEED_RANGE..SEED_RANGE),
            rng.gen_range(-SEED_RANGE..SEED_RANGE),
        )
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorldError::invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn unit(field: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WorldError::invalid(field, format!("must lie in [0, 1], got {value}")))
    }
}
