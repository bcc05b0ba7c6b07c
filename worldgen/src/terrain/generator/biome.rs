use terrain_types::biome::BiomeLabel;
use terrain_types::coords::{Vec3, WorldSeed};
use terrain_types::material::{Color, MaterialDefinition, MaterialId};

use crate::config::BiomeConfig;
use crate::terrain::generator::NoiseField;

/// Maps world position and normalized height to a biome.
///
/// Height bands are checked first (snow, then mountain), then temperature
/// (desert), then moisture (forest); anything left is plains. Classification
/// is a pure function of its inputs.
#[derive(Clone, Debug)]
pub struct BiomeClassifier {
    noise: NoiseField,
    seed: WorldSeed,
    temperature_scale: f64,
    moisture_scale: f64,
    moisture_offset: f64,
    snow_threshold: f32,
    mountain_threshold: f32,
    desert_threshold: f32,
    forest_threshold: f32,
    // indexed by BiomeLabel::id
    materials: [MaterialDefinition; 5],
}

impl BiomeClassifier {
    pub fn new(config: &BiomeConfig, seed: WorldSeed) -> Self {
        let materials = BiomeLabel::ALL.map(|label| {
            let style = config.style(label);
            MaterialDefinition {
                id: label.id(),
                name: label.name().to_owned(),
                base_color: style.color,
                texture: style.texture.clone(),
            }
        });

        Self {
            noise: NoiseField::new(),
            seed,
            temperature_scale: config.temperature_scale,
            moisture_scale: config.moisture_scale,
            moisture_offset: config.moisture_offset,
            snow_threshold: config.snow_threshold,
            mountain_threshold: config.mountain_threshold,
            desert_threshold: config.desert_threshold,
            forest_threshold: config.forest_threshold,
            materials,
        }
    }

    pub fn classify(&self, position: Vec3, normalized_height: f32) -> BiomeLabel {
        if normalized_height > self.snow_threshold {
            BiomeLabel::Snow
        } else if normalized_height > self.mountain_threshold {
            BiomeLabel::Mountain
        } else if self.temperature(position) > self.desert_threshold {
            BiomeLabel::Desert
        } else if self.moisture(position) > self.forest_threshold {
            BiomeLabel::Forest
        } else {
            BiomeLabel::Plains
        }
    }

    /// The decision table of [`classify`](Self::classify) over already
    /// sampled climate values.
    pub fn select(&self, normalized_height: f32, temperature: f32, moisture: f32) -> BiomeLabel {
        if normalized_height > self.snow_threshold {
            BiomeLabel::Snow
        } else if normalized_height > self.mountain_threshold {
            BiomeLabel::Mountain
        } else if temperature > self.desert_threshold {
            BiomeLabel::Desert
        } else if moisture > self.forest_threshold {
            BiomeLabel::Forest
        } else {
            BiomeLabel::Plains
        }
    }

    /// Temperature in [0, 1].
    pub fn temperature(&self, position: Vec3) -> f32 {
        let x = (position.x as f64 + self.seed.x) / self.temperature_scale;
        let z = (position.z as f64 + self.seed.z) / self.temperature_scale;
        self.climate(x, z)
    }

    /// Moisture in [0, 1].
    pub fn moisture(&self, position: Vec3) -> f32 {
        let x = (position.x as f64 + self.seed.x + self.moisture_offset) / self.moisture_scale;
        let z = (position.z as f64 + self.seed.z + self.moisture_offset) / self.moisture_scale;
        self.climate(x, z)
    }

    // base layer plus a half-weight layer at double frequency
    fn climate(&self, x: f64, z: f64) -> f32 {
        let base = self.noise.sample01(x, z);
        let detail = self.noise.sample01(x * 2.0, z * 2.0) * 0.5;
        (base + detail).clamp(0.0, 1.0) as f32
    }

    pub fn color_of(&self, label: BiomeLabel) -> Color {
        self.material_of(label).base_color
    }

    pub fn material_of(&self, label: BiomeLabel) -> &MaterialDefinition {
        &self.materials[label.id() as usize]
    }

    /// Color for a raw material id; ids outside the biome set get neutral white.
    pub fn color_of_id(&self, id: MaterialId) -> Color {
        BiomeLabel::from_id(id).map_or(Color::WHITE, |label| self.color_of(label))
    }

    pub fn seed(&self) -> WorldSeed {
        self.seed
    }
}
