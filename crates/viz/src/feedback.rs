//! On-screen message log and UI sound cues.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use colony_events::{FeedbackCue, MessageKind, Notification};
use inspiration_panel::{FeedbackSink, MessageLog};

use crate::panel::PanelSettings;

/// Plugin for the message log and cue playback.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OnScreenMessages>()
            .add_event::<CuePlayed>()
            .add_systems(Update, (draw_messages, play_cues));
    }
}

/// Messages posted by the panel, newest last.
#[derive(Resource)]
pub struct OnScreenMessages(pub MessageLog);

impl FromWorld for OnScreenMessages {
    fn from_world(world: &mut World) -> Self {
        let log = world
            .get_resource::<PanelSettings>()
            .map(|s| MessageLog::from_config(&s.0.feedback))
            .unwrap_or_default();
        Self(log)
    }
}

/// Event fired when the panel asks for a UI sound.
#[derive(Event, Debug, Clone, Copy)]
pub struct CuePlayed(pub FeedbackCue);

/// Collects one frame's feedback so it can be applied after the host
/// borrow on the world ends.
#[derive(Debug, Default)]
pub struct FrameFeedback {
    pub notifications: Vec<Notification>,
    pub cues: Vec<FeedbackCue>,
}

impl FeedbackSink for FrameFeedback {
    fn post(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn play(&mut self, cue: FeedbackCue) {
        self.cues.push(cue);
    }
}

impl FrameFeedback {
    /// Push collected messages into the log and fire cue events.
    pub fn flush(self, world: &mut World, now: f64) {
        if let Some(mut messages) = world.get_resource_mut::<OnScreenMessages>() {
            for notification in self.notifications {
                messages.0.push(notification, now);
            }
        }
        for cue in self.cues {
            world.send_event(CuePlayed(cue));
        }
    }
}

/// Text color for a message kind.
pub fn message_color(kind: MessageKind) -> egui::Color32 {
    match kind {
        MessageKind::PositiveEvent => egui::Color32::from_rgb(140, 220, 140),
        MessageKind::NeutralEvent => egui::Color32::from_gray(220),
        MessageKind::RejectInput => egui::Color32::from_rgb(230, 110, 110),
    }
}

fn draw_messages(
    mut contexts: EguiContexts,
    time: Res<Time<Real>>,
    mut messages: ResMut<OnScreenMessages>,
) {
    let now = time.elapsed_seconds_f64();
    messages.0.prune(now);
    if messages.0.is_empty() {
        return;
    }

    let log = &messages.0;
    let lines: Vec<(String, egui::Color32)> = log
        .iter()
        .map(|m| {
            let color = message_color(m.notification.kind).gamma_multiply(log.opacity(m, now));
            (m.notification.text.clone(), color)
        })
        .collect();

    egui::Area::new(egui::Id::new("inspiration_messages"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            for (text, color) in lines {
                ui.colored_label(color, text);
            }
        });
}

fn play_cues(
    mut commands: Commands,
    mut cues: EventReader<CuePlayed>,
    settings: Res<PanelSettings>,
    assets: Res<AssetServer>,
) {
    for CuePlayed(cue) in cues.read() {
        match (&settings.0.feedback.click_sound, cue) {
            (Some(path), FeedbackCue::Click) => {
                commands.spawn(AudioBundle {
                    source: assets.load(path.clone()),
                    settings: PlaybackSettings::DESPAWN,
                });
            }
            (None, FeedbackCue::Click) => tracing::trace!("Click cue with no sound configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colony_events::GameTimestamp;

    #[test]
    fn test_frame_feedback_flushes_into_log_and_events() {
        let mut world = World::new();
        world.insert_resource(OnScreenMessages(MessageLog::default()));
        world.init_resource::<Events<CuePlayed>>();

        let mut feedback = FrameFeedback::default();
        feedback.post(Notification::new(
            "Granted Inspired to Ada!",
            MessageKind::PositiveEvent,
            GameTimestamp::start(),
        ));
        feedback.play(FeedbackCue::Click);
        feedback.flush(&mut world, 1.0);

        assert_eq!(world.resource::<OnScreenMessages>().0.len(), 1);
        assert_eq!(world.resource::<Events<CuePlayed>>().len(), 1);
    }

    #[test]
    fn test_message_colors_distinguish_kinds() {
        assert_ne!(
            message_color(MessageKind::PositiveEvent),
            message_color(MessageKind::RejectInput)
        );
    }
}
