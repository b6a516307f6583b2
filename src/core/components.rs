use bevy::prelude::*;

// Marks a container produced by a bake so "override existing" can find and
// despawn it before regenerating. One marker kind per bake path.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum GeneratedTunnel {
    #[default]
    Rings,
    Mesh,
    Collider,
}

impl GeneratedTunnel {
    /// Well-known container name for this bake kind.
    pub fn container_name(&self) -> &'static str {
        match self {
            GeneratedTunnel::Rings => "Tunnel",
            GeneratedTunnel::Mesh => "Tunnel Mesh",
            GeneratedTunnel::Collider => "Tunnel Collider",
        }
    }
}
