use bevy::prelude::*;
use crate::core::components::GeneratedTunnel;
use crate::event_system::event_system_plugin::EventSystemPlugin;
use crate::management::material_autoloader::MaterialAutoloader;
use crate::serialization::caching::MaterialCache;
use crate::spawning::spline_placer::apply_spline_object_placers;

pub struct TunnelCreatorPlugin;

impl Plugin for TunnelCreatorPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(MaterialCache::new())
            .add_plugins(MaterialAutoloader)
            .add_plugins(EventSystemPlugin)
            .add_systems(Update, apply_spline_object_placers)
            .register_type::<GeneratedTunnel>();
    }
}
