use bevy::prelude::Vec2;
use image::GrayImage;

/// Bilinear grayscale sample at normalized `uv`, result in `[0, 1]`.
/// Coordinates clamp to the image border.
pub fn sample_bilinear(image: &GrayImage, uv: Vec2) -> f32 {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }

    let x = uv.x.clamp(0.0, 1.0) * (width - 1) as f32;
    let y = uv.y.clamp(0.0, 1.0) * (height - 1) as f32;

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let luma = |x: u32, y: u32| image.get_pixel(x, y).0[0] as f32 / 255.0;

    let top = luma(x0, y0) * (1.0 - fx) + luma(x1, y0) * fx;
    let bottom = luma(x0, y1) * (1.0 - fx) + luma(x1, y1) * fx;
    top * (1.0 - fy) + bottom * fy
}
