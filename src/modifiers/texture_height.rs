use bevy::prelude::*;
use image::GrayImage;
use crate::modifiers::pipeline::{PlacementCell, RingModifier};
use crate::modifiers::sampling::sample_bilinear;

/// Radial displacement from a grayscale height field: instances are pushed
/// away from the tunnel axis by `sample * amount`. Without a height map the
/// stage is the identity.
pub struct TextureHeightModifier {
    height_map: Option<GrayImage>,
    amount: f32,
}

impl TextureHeightModifier {
    pub fn new(height_map: GrayImage, amount: f32) -> Self {
        TextureHeightModifier {
            height_map: Some(height_map),
            amount,
        }
    }
}

impl RingModifier for TextureHeightModifier {
    fn position_offset(&self, position: Vec3, cell: PlacementCell) -> Vec3 {
        match &self.height_map {
            Some(height_map) => {
                let sample = sample_bilinear(height_map, cell.uv());
                position + position.normalize_or_zero() * sample * self.amount
            }
            None => position,
        }
    }
}
