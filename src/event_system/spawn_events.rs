use bevy::prelude::*;

/// Bake the instance-placement path of the targeted spawner: a "Tunnel"
/// container, one child per ring, one instance child per surviving
/// placement record.
#[derive(Debug, Clone, Event)]
pub struct TunnelSpawnEvent {
    pub spawner: Entity,
}

/// Bake the render tube of the targeted spawner into a "Tunnel Mesh" child.
#[derive(Debug, Clone, Event)]
pub struct TunnelMeshSpawnEvent {
    pub spawner: Entity,
}

/// Bake the collision tube of the targeted spawner into a "Tunnel Collider"
/// child.
#[derive(Debug, Clone, Event)]
pub struct TunnelColliderSpawnEvent {
    pub spawner: Entity,
}
