use serde::{Serialize, Deserialize};
use bevy::prelude::Vec2;

/// Named material reference resolved against the material cache when a
/// tunnel mesh is baked. The tiled variant scales the generated UVs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TMaterial {
    BasicMaterial {
        material_name: String,
    },
    TiledMaterial {
        material_name: String,
        tiling_factor: Vec2,
    },
}

impl TMaterial {
    pub fn material_name(&self) -> &str {
        match self {
            TMaterial::BasicMaterial { material_name } => material_name,
            TMaterial::TiledMaterial { material_name, .. } => material_name,
        }
    }
}

impl Default for TMaterial {
    fn default() -> Self {
        TMaterial::BasicMaterial {
            material_name: "tunnel_wall".to_string(),
        }
    }
}
