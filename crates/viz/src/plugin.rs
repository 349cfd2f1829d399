//! Main plugin that ties the window, colony and panel together.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::colony::ColonyPlugin;
use crate::feedback::FeedbackPlugin;
use crate::panel::PanelPlugin;

/// Main plugin for the inspiration debug app.
///
/// Sets up the window and adds the host colony, the panel and its
/// feedback layer. Insert [`crate::panel::PanelSettings`] and
/// [`crate::colony::ColonySetup`] before adding it to override defaults.
pub struct InspirationVizPlugin;

impl Plugin for InspirationVizPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Colony Inspirations".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_systems(Startup, spawn_camera)
        .add_plugins((ColonyPlugin, PanelPlugin, FeedbackPlugin));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
