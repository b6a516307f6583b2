use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use bevy_rapier3d::render::RapierDebugRenderPlugin;
use tunnel_gen::core::tunnel_plugin::TunnelCreatorPlugin;
use tunnel_gen::management::material_autoloader::TunnelAssetState;

mod camera;
mod generation;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "info,wgpu=warn".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Tunnel Gen Testing".into(),
                    resolution: (1024.0, 768.0).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    app.insert_resource(AmbientLight {
        color: Color::srgba(154.0 / 255.0, 166.0 / 255.0, 254.0 / 255.0, 1.0),
        brightness: 150.0,
    });

    // Setup tunnel generator
    app.add_plugins(TunnelCreatorPlugin);

    // Bake once the material textures have loaded
    app.add_systems(
        OnEnter(TunnelAssetState::Ready),
        (ingame_setup, generation::generate_tunnel).chain(),
    );
    app.add_systems(Update, generation::rebake_on_space);

    // Setup camera
    app.add_plugins(crate::camera::CameraPlugin);

    // Setup physics so the baked tunnel collider is visible via debug render
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
    app.add_plugins(RapierDebugRenderPlugin::default());

    app.run();
}

fn ingame_setup(mut commands: Commands) {
    commands
        .spawn_empty()
        .insert(DirectionalLight {
            shadows_enabled: true,
            illuminance: 30000.0,
            color: Color::srgba(171.0 / 255.0, 183.0 / 255.0, 255.0 / 255.0, 1.0),
            ..default()
        })
        .insert(Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -0.9,
            0.4,
            0.0,
        )));
}
