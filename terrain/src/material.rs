// src/material.rs

use serde::{Deserialize, Serialize};

/// Which material (plains, forest, snow…) a vertex belongs to.
pub type MaterialId = u8;

/// Linear RGBA color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Neutral color returned for anything without a defined biome.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Scales the color channels, leaving alpha untouched.
    pub fn shaded(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDefinition {
    pub id: MaterialId,
    pub name: String,
    pub base_color: Color,
    pub texture: Option<String>,
}
