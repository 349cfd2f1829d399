//! The inspiration panel window: toggle input, drawing and intent dispatch.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContext, EguiContexts};
use colony_core::InspirationDatabase;
use inspiration_panel::{
    ActionCoordinator, InspirationPanel, PanelConfig, PanelIntent, PanelView, WindowConfig,
};

use crate::feedback::FrameFeedback;
use crate::host::{CatalogSource, WorldHost};

/// Plugin for the inspiration panel window.
pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        inspiration_panel::init();

        app.init_resource::<PanelSettings>()
            .init_resource::<PanelState>()
            .init_resource::<ToggleKey>()
            .add_systems(Update, (toggle_panel_input, sync_pause).chain())
            .add_systems(Update, draw_inspiration_panel.after(sync_pause));
    }
}

/// Loaded panel configuration.
#[derive(Resource, Default, Clone)]
pub struct PanelSettings(pub PanelConfig);

/// The panel's state machine, keyed by colonist entity.
#[derive(Resource)]
pub struct PanelState(pub InspirationPanel<Entity>);

impl Default for PanelState {
    fn default() -> Self {
        Self(InspirationPanel::new(ActionCoordinator::new(None)))
    }
}

/// Key that opens and closes the panel.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ToggleKey(pub KeyCode);

impl FromWorld for ToggleKey {
    fn from_world(world: &mut World) -> Self {
        let name = world
            .get_resource::<PanelSettings>()
            .map(|s| s.0.window.toggle_key.clone())
            .unwrap_or_default();
        match parse_key(&name) {
            Some(key) => Self(key),
            None => {
                tracing::warn!("Unknown toggle key '{}', using I", name);
                Self(KeyCode::KeyI)
            }
        }
    }
}

/// Parse a key name from config ("I", "f2", "Backquote").
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let key = match name.trim().to_ascii_uppercase().as_str() {
        "A" => KeyCode::KeyA,
        "B" => KeyCode::KeyB,
        "C" => KeyCode::KeyC,
        "D" => KeyCode::KeyD,
        "E" => KeyCode::KeyE,
        "F" => KeyCode::KeyF,
        "G" => KeyCode::KeyG,
        "H" => KeyCode::KeyH,
        "I" => KeyCode::KeyI,
        "J" => KeyCode::KeyJ,
        "K" => KeyCode::KeyK,
        "L" => KeyCode::KeyL,
        "M" => KeyCode::KeyM,
        "N" => KeyCode::KeyN,
        "O" => KeyCode::KeyO,
        "P" => KeyCode::KeyP,
        "Q" => KeyCode::KeyQ,
        "R" => KeyCode::KeyR,
        "S" => KeyCode::KeyS,
        "T" => KeyCode::KeyT,
        "U" => KeyCode::KeyU,
        "V" => KeyCode::KeyV,
        "W" => KeyCode::KeyW,
        "X" => KeyCode::KeyX,
        "Y" => KeyCode::KeyY,
        "Z" => KeyCode::KeyZ,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        "BACKQUOTE" | "`" => KeyCode::Backquote,
        _ => return None,
    };
    Some(key)
}

fn toggle_panel_input(
    mut contexts: EguiContexts,
    keyboard: Res<ButtonInput<KeyCode>>,
    key: Res<ToggleKey>,
    database: Option<Res<InspirationDatabase>>,
    mut state: ResMut<PanelState>,
) {
    if !keyboard.just_pressed(key.0) {
        return;
    }
    // Typing the toggle letter into the filter box must not close the window.
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    state.0.toggle(&CatalogSource(database.as_deref()));
    tracing::debug!("Inspiration panel open: {}", state.0.is_open());
}

/// Pause game time while the panel is open, if configured to.
fn sync_pause(
    state: Res<PanelState>,
    settings: Res<PanelSettings>,
    mut time: ResMut<Time<Virtual>>,
    mut paused_by_panel: Local<bool>,
) {
    let want_pause = settings.0.window.pause_game && state.0.is_open();
    if want_pause && !time.is_paused() {
        time.pause();
        *paused_by_panel = true;
    } else if !want_pause && *paused_by_panel {
        time.unpause();
        *paused_by_panel = false;
    }
}

fn draw_inspiration_panel(world: &mut World) {
    let open = world.get_resource::<PanelState>().is_some_and(|s| s.0.is_open());
    if !open {
        return;
    }

    let ctx = {
        let Some(mut egui_ctx) = world.query::<&mut EguiContext>().iter_mut(world).next() else {
            return;
        };
        egui_ctx.get_mut().clone()
    };
    let Some(mut state) = world.remove_resource::<PanelState>() else {
        return;
    };
    let window = world
        .get_resource::<PanelSettings>()
        .map(|s| s.0.window.clone())
        .unwrap_or_default();
    let now = world.resource::<Time<Real>>().elapsed_seconds_f64();

    let mut feedback = FrameFeedback::default();
    {
        let mut host = WorldHost::new(world);
        state.0.refresh(&host);
        let view = state.0.view(&host);
        for intent in draw_window(&ctx, &window, &view) {
            let outcome = state.0.handle(intent, &mut host, &mut feedback);
            tracing::trace!("Panel intent handled: {:?}", outcome);
        }
    }
    feedback.flush(world, now);
    world.insert_resource(state);
}

/// Draw the three-column window and return what the user did this frame.
pub fn draw_window(
    ctx: &egui::Context,
    config: &WindowConfig,
    view: &PanelView<Entity>,
) -> Vec<PanelIntent<Entity>> {
    let mut intents = Vec::new();
    let mut open = true;

    let mut window = egui::Window::new(config.title.as_str())
        .id(egui::Id::new("inspiration_panel"))
        .default_size([config.width, config.height])
        .collapsible(false);
    if config.show_close_button {
        window = window.open(&mut open);
    }

    window.show(ctx, |ui| {
        ui.columns(3, |columns| {
            colonist_column(&mut columns[0], view, &mut intents);
            inspiration_column(&mut columns[1], view, &mut intents);
            action_column(&mut columns[2], view, &mut intents);
        });
    });

    if !open {
        intents.push(PanelIntent::Close);
    }
    intents
}

fn colonist_column(
    ui: &mut egui::Ui,
    view: &PanelView<Entity>,
    intents: &mut Vec<PanelIntent<Entity>>,
) {
    ui.strong("Select Colonist");
    ui.separator();
    egui::ScrollArea::vertical()
        .id_source("colonist_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in &view.colonists {
                if ui.selectable_label(row.selected, row.label.as_str()).clicked() {
                    intents.push(PanelIntent::SelectColonist(row.colonist));
                }
            }
        });
}

fn inspiration_column(
    ui: &mut egui::Ui,
    view: &PanelView<Entity>,
    intents: &mut Vec<PanelIntent<Entity>>,
) {
    ui.strong("Select Inspiration");
    ui.separator();

    let mut filter = view.filter_text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut filter)
            .hint_text("Search...")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        intents.push(PanelIntent::SetFilter(filter));
    }
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source("inspiration_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in &view.inspirations {
                if ui.selectable_label(row.selected, row.label.as_str()).clicked() {
                    intents.push(PanelIntent::SelectInspiration(row.def_name.clone()));
                }
            }
        });
}

fn action_column(
    ui: &mut egui::Ui,
    view: &PanelView<Entity>,
    intents: &mut Vec<PanelIntent<Entity>>,
) {
    let action = &view.action;
    ui.strong("Actions");
    ui.separator();

    ui.label(format!("Colonist: {}", action.colonist_name));
    if let Some(current) = &action.current_inspiration {
        ui.colored_label(egui::Color32::YELLOW, format!("Current: {}", current));
    }
    ui.add_space(10.0);

    ui.label(format!("Inspiration: {}", action.inspiration_name));
    if let Some(description) = &action.description {
        ui.colored_label(egui::Color32::from_gray(200), description.as_str());
    }
    ui.add_space(20.0);

    let button_size = egui::vec2(ui.available_width(), 35.0);
    let grant = egui::Button::new("Grant Inspiration").min_size(button_size);
    if ui.add_enabled(action.can_grant, grant).clicked() {
        intents.push(PanelIntent::Grant);
    }

    if action.can_remove {
        ui.add_space(10.0);
        let remove = egui::Button::new(
            egui::RichText::new("Remove Current Inspiration")
                .color(egui::Color32::from_rgb(255, 128, 128)),
        )
        .min_size(button_size);
        if ui.add(remove).clicked() {
            intents.push(PanelIntent::RemoveCurrent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_is_case_insensitive() {
        assert_eq!(parse_key("i"), Some(KeyCode::KeyI));
        assert_eq!(parse_key(" I "), Some(KeyCode::KeyI));
        assert_eq!(parse_key("f2"), Some(KeyCode::F2));
        assert_eq!(parse_key("`"), Some(KeyCode::Backquote));
    }

    #[test]
    fn test_parse_key_rejects_unknown_names() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("Hyper"), None);
    }

    #[test]
    fn test_toggle_key_falls_back_to_i() {
        let mut world = World::new();
        let mut config = PanelConfig::default();
        config.window.toggle_key = "nonsense".into();
        world.insert_resource(PanelSettings(config));
        assert_eq!(ToggleKey::from_world(&mut world).0, KeyCode::KeyI);
    }

    #[test]
    fn test_toggle_key_reads_config() {
        let mut world = World::new();
        let mut config = PanelConfig::default();
        config.window.toggle_key = "F8".into();
        world.insert_resource(PanelSettings(config));
        assert_eq!(ToggleKey::from_world(&mut world).0, KeyCode::F8);
    }
}
