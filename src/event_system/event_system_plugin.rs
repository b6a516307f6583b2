use bevy::prelude::*;
use crate::event_system::spawn_events::*;
use crate::event_system::event_listeners::*;

pub struct EventSystemPlugin;

impl Plugin for EventSystemPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TunnelSpawnEvent>()
            .add_event::<TunnelMeshSpawnEvent>()
            .add_event::<TunnelColliderSpawnEvent>();

        app.add_systems(Update, (
            tunnel_spawn_listener,
            tunnel_mesh_spawn_listener,
            tunnel_collider_spawn_listener,
        ));
    }
}
