mod biome;
mod heightmap;
mod mesh;
mod noise_field;

pub use biome::BiomeClassifier;
pub use heightmap::HeightmapGenerator;
pub use mesh::MeshGenerator;
pub use noise_field::NoiseField;

#[cfg(test)]
mod tests;
