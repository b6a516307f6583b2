use image::GrayImage;
use crate::modifiers::pipeline::{PlacementCell, RingModifier};
use crate::modifiers::sampling::sample_bilinear;

/// Density mask: instances are only emitted where the mask is at least as
/// bright as `falloff`. Without a mask every instance passes.
pub struct TextureMaskModifier {
    mask: Option<GrayImage>,
    falloff: f32,
}

impl TextureMaskModifier {
    pub fn new(mask: GrayImage, falloff: f32) -> Self {
        TextureMaskModifier {
            mask: Some(mask),
            falloff: falloff.clamp(0.0, 1.0),
        }
    }

    pub fn unmasked(falloff: f32) -> Self {
        TextureMaskModifier {
            mask: None,
            falloff: falloff.clamp(0.0, 1.0),
        }
    }
}

impl RingModifier for TextureMaskModifier {
    fn condition(&self, cell: PlacementCell) -> bool {
        match &self.mask {
            Some(mask) => sample_bilinear(mask, cell.uv()) >= self.falloff,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn cell(x: usize, width: usize) -> PlacementCell {
        PlacementCell { x, y: 0, width, height: 8 }
    }

    #[test]
    fn dark_regions_are_vetoed() {
        // Left half black, right half white.
        let mask = GrayImage::from_fn(4, 4, |x, _| Luma([if x < 2 { 0 } else { 255 }]));
        let modifier = TextureMaskModifier::new(mask, 0.5);

        assert!(!modifier.condition(cell(0, 8)));
        assert!(modifier.condition(cell(7, 8)));
    }

    #[test]
    fn missing_mask_accepts_everything() {
        let modifier = TextureMaskModifier::unmasked(1.0);
        assert!(modifier.condition(cell(0, 8)));
    }
}
