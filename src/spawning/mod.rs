pub mod tunnel_spawner;
pub mod ring_sampler;
pub mod instance_placer;
pub mod spline_placer;
pub mod helpers;
