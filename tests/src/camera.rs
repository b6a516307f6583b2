use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

#[derive(Component)]
pub(crate) struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, initialize_camera_system)
            .add_systems(Update, camera_controller_system)
            .insert_resource(OrbitState::default());
    }
}

#[derive(Resource)]
pub(crate) struct OrbitState {
    focus: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        OrbitState {
            // Demo tunnel runs roughly 32 units along +Z; orbit its middle.
            focus: Vec3::new(0.0, 1.0, 16.0),
            distance: 45.0,
            yaw: 0.6,
            pitch: 0.35,
        }
    }
}

impl OrbitState {
    fn transform(&self) -> Transform {
        let offset = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0) * Vec3::Z;
        Transform::from_translation(self.focus + offset * self.distance)
            .looking_at(self.focus, Vec3::Y)
    }
}

pub(crate) fn initialize_camera_system(mut commands: Commands, orbit: Res<OrbitState>) {
    commands.spawn((
        Camera3d::default(),
        orbit.transform(),
        Name::new("MainCamera"),
        MainCamera,
    ));
}

fn camera_controller_system(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut mouse_wheel_events: EventReader<MouseWheel>,
    mut mouse_motion_events: EventReader<MouseMotion>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut orbit: ResMut<OrbitState>,
) {
    let Ok(mut camera_transform) = camera_query.get_single_mut() else {
        return;
    };

    let mut changed = false;

    for event in mouse_wheel_events.read() {
        orbit.distance = (orbit.distance - event.y * 2.0).clamp(5.0, 150.0);
        changed = true;
    }

    for event in mouse_motion_events.read() {
        if buttons.pressed(MouseButton::Right) {
            orbit.yaw -= event.delta.x * 0.01;
            orbit.pitch = (orbit.pitch + event.delta.y * 0.01).clamp(-1.4, 1.4);
            changed = true;
        }
    }

    if changed {
        *camera_transform = orbit.transform();
    }
}
