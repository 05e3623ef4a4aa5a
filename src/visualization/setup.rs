//! Scene setup: camera, lighting, entity spheres and overlay text.

use bevy::prelude::*;
use bevy::ui::PositionType;

use crate::visualization::components::{BeatCaptionText, BreadcrumbText, EntityNode};
use crate::visualization::constants::{channel_color, ENTITY_RADIUS};
use crate::visualization::resources::{CameraRig, ExplorerRes};

/// Setup the scene with camera, lighting, and one sphere per entity.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    explorer: Res<ExplorerRes>,
    rig: Res<CameraRig>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(rig.position).looking_at(rig.look_at, Vec3::Y),
    ));

    // Main directional light (sun-like)
    commands.spawn((
        DirectionalLight {
            illuminance: 15000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(60.0, 120.0, 60.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    // Entities share one mesh but each gets its own material, since opacity
    // and glow vary per entity with the focused channel.
    let mesh = meshes.add(Sphere::new(ENTITY_RADIUS).mesh().ico(3).unwrap());
    let explorer = &explorer.0;

    for entity in explorer.entities().entities() {
        let base_color = channel_color(&entity.channel, explorer.channels().get(&entity.channel));
        let material = materials.add(StandardMaterial {
            base_color,
            metallic: 0.2,
            perceptual_roughness: 0.5,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(entity.position),
            EntityNode {
                id: entity.id.clone(),
                channel: entity.channel.clone(),
                base_color,
            },
        ));
    }

    // Breadcrumb trail (top left)
    commands.spawn((
        Text::new("Ecosystem"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
        BreadcrumbText,
    ));

    // Shortcut help (top right)
    commands.spawn((
        Text::new(
            "Esc/Backspace: back   Home, Ctrl+1: ecosystem\n\
             Ctrl+0: reorient   Ctrl+=/-: zoom   T: tour   \u{2190}/\u{2192}: beats",
        ),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(0.8, 0.8, 0.8, 0.7)),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));

    // Story caption (bottom)
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.85)),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(12.0),
            max_width: Val::Px(640.0),
            ..default()
        },
        BeatCaptionText,
    ));
}
