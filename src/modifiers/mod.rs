pub mod pipeline;
pub mod sampling;
pub mod texture_mask;
pub mod texture_height;
