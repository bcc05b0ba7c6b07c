use noise::{NoiseFn, Perlin};

/// Permutation seed of the underlying Perlin table. Per-session variation
/// comes from the world seed offset, not from reseeding the table.
const PERLIN_SEED: u32 = 0;

/// Deterministic 2D coherent noise with fractal composition. Holds no
/// mutable state.
#[derive(Clone)]
pub struct NoiseField {
    noise: Perlin,
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &PERLIN_SEED).finish()
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseField {
    pub fn new() -> Self {
        Self { noise: Perlin::new(PERLIN_SEED) }
    }

    /// Gradient noise in [-1, 1].
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.noise.get([x, z]).clamp(-1.0, 1.0)
    }

    /// Same field remapped to [0, 1].
    pub fn sample01(&self, x: f64, z: f64) -> f64 {
        self.sample(x, z) * 0.5 + 0.5
    }

    /// Sum of `octaves` layers normalized by the total amplitude, so the
    /// result stays in [-1, 1] whatever the octave count.
    pub fn fractal_sample(
        &self,
        x: f64,
        z: f64,
        octaves: usize,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut noise_height = 0.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            noise_height += self.sample(x * frequency, z * frequency) * amplitude;

            max_value += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_value == 0.0 {
            return 0.0;
        }
        noise_height / max_value
    }
}
