use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy_rapier3d::prelude::RigidBody;
use crate::core::components::GeneratedTunnel;
use crate::core::tmaterial::TMaterial;
use crate::event_system::spawn_events::*;
use crate::mesh::collider_builder::build_collider;
use crate::mesh::tube_builder::{build_tube_geometry, tube_mesh};
use crate::serialization::caching::MaterialCache;
use crate::spawning::instance_placer::place_tunnel;
use crate::spawning::tunnel_spawner::TunnelSpawner;

/// Despawns the previously generated container of `kind` under `spawner`,
/// implementing the "override existing" bake semantics.
fn despawn_generated(
    commands: &mut Commands,
    previous: &Query<(Entity, &GeneratedTunnel, &Parent)>,
    spawner: Entity,
    kind: GeneratedTunnel,
) {
    for (entity, generated, parent) in previous.iter() {
        if parent.get() == spawner && *generated == kind {
            commands.entity(entity).despawn_recursive();
        }
    }
}

pub fn tunnel_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<TunnelSpawnEvent>,
    mut spawners: Query<&mut TunnelSpawner>,
    previous: Query<(Entity, &GeneratedTunnel, &Parent)>,
    asset_server: Res<AssetServer>,
) {
    for event in reader.read() {
        let Ok(spawner) = spawners.get_mut(event.spawner) else {
            warn!("TunnelSpawnEvent targets {:?} without a TunnelSpawner", event.spawner);
            continue;
        };
        let spawner = spawner.into_inner();

        let dropped = spawner.heal_profile();
        if dropped > 0 {
            info!("[Tunnel] Profile regenerated, {} control point sizes dropped", dropped);
        }

        let Some(spline) = spawner.spline.as_deref() else {
            warn!("[Tunnel] No spline attached, skipping bake");
            continue;
        };

        let rings = match place_tunnel(spline, spawner.profile(), &spawner.config, &spawner.modifiers) {
            Ok(rings) => rings,
            Err(error) => {
                warn!("[Tunnel] Bake rejected: {:?}", error);
                continue;
            }
        };

        if spawner.config.override_existing {
            despawn_generated(&mut commands, &previous, event.spawner, GeneratedTunnel::Rings);
        }

        let template: Option<Handle<Scene>> = spawner
            .config
            .instance_scene
            .as_ref()
            .map(|path| asset_server.load(path.clone()));

        let root = commands
            .spawn((
                Name::new(GeneratedTunnel::Rings.container_name()),
                GeneratedTunnel::Rings,
                Transform::default(),
                Visibility::default(),
            ))
            .set_parent(event.spawner)
            .id();

        let mut instance_total = 0;
        for ring in &rings {
            let ring_entity = commands
                .spawn((
                    Name::new(format!("Ring {}", ring.index)),
                    Transform::from_translation(ring.center).with_rotation(ring.orientation),
                    Visibility::default(),
                ))
                .set_parent(root)
                .id();

            instance_total += ring.instances.len();
            for instance in &ring.instances {
                let mut child = commands.spawn((
                    Transform {
                        translation: instance.translation,
                        rotation: instance.rotation,
                        ..default()
                    },
                    Visibility::default(),
                ));
                if let Some(template) = &template {
                    child.insert(SceneRoot(template.clone()));
                }
                child.set_parent(ring_entity);
            }
        }

        info!("[Tunnel] Baked {} rings, {} instances", rings.len(), instance_total);
    }
}

pub fn tunnel_mesh_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<TunnelMeshSpawnEvent>,
    mut spawners: Query<&mut TunnelSpawner>,
    previous: Query<(Entity, &GeneratedTunnel, &Parent)>,
    material_cache: Res<MaterialCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in reader.read() {
        let Ok(spawner) = spawners.get_mut(event.spawner) else {
            warn!("TunnelMeshSpawnEvent targets {:?} without a TunnelSpawner", event.spawner);
            continue;
        };
        let spawner = spawner.into_inner();

        let dropped = spawner.heal_profile();
        if dropped > 0 {
            info!("[Tunnel Mesh] Profile regenerated, {} control point sizes dropped", dropped);
        }

        let Some(spline) = spawner.spline.as_deref() else {
            warn!("[Tunnel Mesh] No spline attached, skipping bake");
            continue;
        };

        let geometry = match build_tube_geometry(
            spline,
            spawner.profile(),
            spawner.config.density.x,
            &spawner.config.mesh_detail,
            true,
        ) {
            Ok(geometry) => geometry,
            Err(error) => {
                warn!("[Tunnel Mesh] Bake rejected: {:?}", error);
                continue;
            }
        };

        let mut mesh = tube_mesh(geometry);

        if let TMaterial::TiledMaterial { tiling_factor, .. } = &spawner.config.material {
            if let Some(VertexAttributeValues::Float32x2(uvs)) =
                mesh.attribute_mut(Mesh::ATTRIBUTE_UV_0)
            {
                for uv in uvs.iter_mut() {
                    uv[0] *= tiling_factor.x;
                    uv[1] *= tiling_factor.y;
                }
            }
        }

        let material_name = spawner.config.material.material_name();
        let material_handle = match material_cache.get(material_name) {
            Some(handle) => handle.clone(),
            None => {
                warn!("[Tunnel Mesh] Material not found: {}, using default", material_name);
                materials.add(StandardMaterial::default())
            }
        };

        if spawner.config.override_existing {
            despawn_generated(&mut commands, &previous, event.spawner, GeneratedTunnel::Mesh);
        }

        commands
            .spawn((
                Name::new(GeneratedTunnel::Mesh.container_name()),
                GeneratedTunnel::Mesh,
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(material_handle),
                Transform::default(),
                Visibility::default(),
            ))
            .set_parent(event.spawner);

        info!("[Tunnel Mesh] Baked");
    }
}

pub fn tunnel_collider_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<TunnelColliderSpawnEvent>,
    mut spawners: Query<&mut TunnelSpawner>,
    previous: Query<(Entity, &GeneratedTunnel, &Parent)>,
) {
    for event in reader.read() {
        let Ok(spawner) = spawners.get_mut(event.spawner) else {
            warn!("TunnelColliderSpawnEvent targets {:?} without a TunnelSpawner", event.spawner);
            continue;
        };
        let spawner = spawner.into_inner();

        let dropped = spawner.heal_profile();
        if dropped > 0 {
            info!("[Tunnel Collider] Profile regenerated, {} control point sizes dropped", dropped);
        }

        let Some(spline) = spawner.spline.as_deref() else {
            warn!("[Tunnel Collider] No spline attached, skipping bake");
            continue;
        };

        let collider = match build_collider(
            spline,
            spawner.profile(),
            spawner.config.density.x,
            &spawner.config.collider_detail,
        ) {
            Ok(collider) => collider,
            Err(error) => {
                warn!("[Tunnel Collider] Bake rejected: {:?}", error);
                continue;
            }
        };

        if spawner.config.override_existing {
            despawn_generated(&mut commands, &previous, event.spawner, GeneratedTunnel::Collider);
        }

        commands
            .spawn((
                Name::new(GeneratedTunnel::Collider.container_name()),
                GeneratedTunnel::Collider,
                collider,
                RigidBody::Fixed,
                Transform::default(),
            ))
            .set_parent(event.spawner);

        info!("[Tunnel Collider] Baked");
    }
}
