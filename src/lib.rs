//! Tunnel generation along splines: a triangulated tube mesh (render and
//! collider variants) plus rings of placed object instances, perturbed by
//! periodic noise and filtered through a modifier pipeline. Bakes are
//! requested through events on an entity carrying a
//! [`spawning::tunnel_spawner::TunnelSpawner`].

pub mod core;
pub mod spline;
pub mod modifiers;
pub mod spawning;
pub mod mesh;
pub mod event_system;
pub mod management;
pub mod serialization;
