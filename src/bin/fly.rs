use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warplane::{
    components::{ChaseCamera, Collider, PlayerController},
    plugins::{StartupSequencePlugin, StartupStage, WarplanePlugin},
    utils::ConfigError,
};

const OBSTACLE_SEED: u64 = 42;
const OBSTACLE_COUNT: usize = 80;
const FIELD_HALF_WIDTH: f32 = 40000.0;
const GROUND_HEIGHT: f32 = 0.0;

fn main() -> Result<(), ConfigError> {
    let plugin = match std::env::args().nth(1) {
        Some(path) => WarplanePlugin::from_config_file(path)?,
        None => WarplanePlugin::default(),
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "WarPlane".into(),
            resolution: (1280., 720.).into(),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((StartupSequencePlugin, plugin))
        .insert_resource(ClearColor(Color::srgb(0.55, 0.7, 0.9)))
        .add_systems(
            Startup,
            (spawn_ground, spawn_obstacle_field, spawn_light).in_set(StartupStage::BuildScene),
        )
        .add_systems(Update, (attach_render_camera, attach_vehicle_mesh));

    app.run();
    Ok(())
}

fn spawn_light(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::new(0.3, 0.0, -0.5), Vec3::Y),
    ));
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Collider::Ground {
            height: GROUND_HEIGHT,
        },
        Mesh3d(meshes.add(Plane3d::default().mesh().size(
            FIELD_HALF_WIDTH * 4.0,
            FIELD_HALF_WIDTH * 4.0,
        ))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
    ));
}

/// Scatters spheres and towers ahead of the spawn point from a fixed seed.
fn spawn_obstacle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(OBSTACLE_SEED);
    let sphere_material = materials.add(Color::srgb(0.8, 0.3, 0.2));
    let tower_material = materials.add(Color::srgb(0.5, 0.5, 0.55));

    for index in 0..OBSTACLE_COUNT {
        let x = rng.gen_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH);
        let z = rng.gen_range(-FIELD_HALF_WIDTH * 2.0..-2000.0);

        if rng.gen_bool(0.5) {
            let radius = rng.gen_range(200.0..1200.0);
            let y = rng.gen_range(2000.0..8000.0);
            commands.spawn((
                Name::new(format!("Sphere {index}")),
                Collider::Sphere { radius },
                Mesh3d(meshes.add(Sphere::new(radius))),
                MeshMaterial3d(sphere_material.clone()),
                Transform::from_xyz(x, y, z),
            ));
        } else {
            let half_extents = [
                rng.gen_range(300.0..1500.0),
                rng.gen_range(2000.0..7000.0),
                rng.gen_range(300.0..1500.0),
            ];
            commands.spawn((
                Name::new(format!("Tower {index}")),
                Collider::Cuboid { half_extents },
                Mesh3d(meshes.add(Cuboid::new(
                    half_extents[0] * 2.0,
                    half_extents[1] * 2.0,
                    half_extents[2] * 2.0,
                ))),
                MeshMaterial3d(tower_material.clone()),
                Transform::from_xyz(x, GROUND_HEIGHT + half_extents[1], z),
            ));
        }
    }

    info!("Spawned {} obstacles with seed {}", OBSTACLE_COUNT, OBSTACLE_SEED);
}

/// Turns every chase camera rig into a rendering camera.
fn attach_render_camera(mut commands: Commands, rigs: Query<Entity, Added<ChaseCamera>>) {
    for entity in rigs.iter() {
        commands.entity(entity).insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                far: 200000.0,
                ..default()
            }),
        ));
    }
}

fn attach_vehicle_mesh(
    mut commands: Commands,
    vehicles: Query<Entity, Added<PlayerController>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in vehicles.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(300.0, 60.0, 200.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.25))),
        ));
    }
}
