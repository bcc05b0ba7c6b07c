// src/biome.rs

use serde::{Deserialize, Serialize};

use crate::material::MaterialId;

/// Discrete terrain classification driving color and material selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiomeLabel {
    Plains,
    Forest,
    Desert,
    Mountain,
    Snow,
}

impl BiomeLabel {
    pub const ALL: [BiomeLabel; 5] = [
        BiomeLabel::Plains,
        BiomeLabel::Forest,
        BiomeLabel::Desert,
        BiomeLabel::Mountain,
        BiomeLabel::Snow,
    ];

    /// Material id used in mesh output; stable across sessions.
    pub const fn id(self) -> MaterialId {
        self as MaterialId
    }

    pub fn from_id(id: MaterialId) -> Option<BiomeLabel> {
        Self::ALL.get(id as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            BiomeLabel::Plains => "plains",
            BiomeLabel::Forest => "forest",
            BiomeLabel::Desert => "desert",
            BiomeLabel::Mountain => "mountain",
            BiomeLabel::Snow => "snow",
        }
    }
}

impl std::fmt::Display for BiomeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for label in BiomeLabel::ALL {
            assert_eq!(BiomeLabel::from_id(label.id()), Some(label));
        }
        assert_eq!(BiomeLabel::from_id(5), None);
        assert_eq!(BiomeLabel::from_id(u8::MAX), None);
    }
}
