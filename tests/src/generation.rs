use std::time::{SystemTime, UNIX_EPOCH};
use bevy::prelude::*;
use tunnel_gen::core::tmaterial::TMaterial;
use tunnel_gen::core::tunnel_config::TunnelConfig;
use tunnel_gen::event_system::spawn_events::{
    TunnelColliderSpawnEvent, TunnelMeshSpawnEvent, TunnelSpawnEvent,
};
use tunnel_gen::management::config_io::import_tunnel_config;
use tunnel_gen::spawn;
use tunnel_gen::spawning::tunnel_spawner::TunnelSpawner;
use tunnel_gen::spline::CardinalSplinePath;

#[derive(Component)]
pub(crate) struct DemoTunnel;

fn demo_spline() -> CardinalSplinePath {
    let points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 8.0),
        Vec3::new(-1.5, 3.0, 16.0),
        Vec3::new(1.5, 2.0, 24.0),
        Vec3::new(0.0, 0.0, 32.0),
    ];
    CardinalSplinePath::new(points, 0.5).expect("demo spline has enough control points")
}

fn demo_config(seed: u64) -> TunnelConfig {
    // Prefer the on-disk preset; fall back to a built-in one when absent.
    let mut config = import_tunnel_config("demo".to_string()).unwrap_or_else(|_| TunnelConfig {
        material: TMaterial::TiledMaterial {
            material_name: "tunnel_wall".to_string(),
            tiling_factor: Vec2::new(4.0, 1.0),
        },
        ..default()
    });
    config.noise.seed = seed;
    config
}

fn send_bake_events(c: &mut Commands, spawner: Entity) {
    spawn!(c, TunnelSpawnEvent { spawner });
    spawn!(c, TunnelMeshSpawnEvent { spawner });
    spawn!(c, TunnelColliderSpawnEvent { spawner });
}

pub(crate) fn generate_tunnel(mut commands: Commands) {
    let spawner = commands
        .spawn_empty()
        .insert(Name::new("DemoTunnel"))
        .insert(TunnelSpawner::new(demo_spline(), demo_config(132)))
        .insert(Transform::default())
        .insert(Visibility::default())
        .insert(DemoTunnel)
        .id();

    send_bake_events(&mut commands, spawner);
}

pub(crate) fn rebake_on_space(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut spawners: Query<(Entity, &mut TunnelSpawner), With<DemoTunnel>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    // Fresh, non-deterministic seed from system time
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let seed = now.as_nanos() as u64;

    for (entity, mut spawner) in spawners.iter_mut() {
        spawner.config.noise.seed = seed;
        send_bake_events(&mut commands, entity);
    }
}
