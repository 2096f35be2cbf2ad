//! Observer side sync adapter.
//!
//! Observer только зеркалит: snapshot перезаписывает поля, regen/slide
//! здесь не симулируются. Локальный ввод уходит на authority как intent.

use bevy::prelude::*;

use super::protocol::{
    InboundSyncMessage, OutboundSyncMessage, SlideIntentMessage, SyncMessage, TargetCoordinates,
};
use crate::logger;
use crate::stamina::components::StaminaState;

/// Event: локальный контроллер нажал slide.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SlideInput {
    pub entity: Entity,
    pub target: TargetCoordinates,
}

/// Система: применить пришедшие snapshots к mirror StaminaState.
///
/// Если mirror ещё нет — создаём (capability появилась на authority).
pub fn apply_inbound_snapshots(
    mut commands: Commands,
    mut inbound: EventReader<InboundSyncMessage>,
    mut mirrors: Query<&mut StaminaState>,
) {
    for message in inbound.read() {
        let snapshot = match SyncMessage::decode(&message.payload) {
            Ok(SyncMessage::Snapshot(snapshot)) => snapshot,
            Ok(SyncMessage::SlideIntent(_)) => {
                logger::log_warning(&format!(
                    "Observer received a slide intent for {:?}, ignoring",
                    message.entity
                ));
                continue;
            }
            Err(err) => {
                logger::log_warning(&format!("Dropping inbound message for {:?}: {}", message.entity, err));
                continue;
            }
        };

        if let Ok(mut mirror) = mirrors.get_mut(message.entity) {
            mirror.apply_snapshot(&snapshot);
        } else {
            let mut mirror = StaminaState::new();
            mirror.apply_snapshot(&snapshot);
            if let Ok(mut entity_commands) = commands.get_entity(message.entity) {
                entity_commands.insert(mirror);
            }
        }
    }
}

/// Система: локальный slide input → intent для authority.
pub fn send_slide_intents(
    mut inputs: EventReader<SlideInput>,
    mut outbound: EventWriter<OutboundSyncMessage>,
) {
    for input in inputs.read() {
        let message = SyncMessage::SlideIntent(SlideIntentMessage {
            target_coordinates: input.target,
        });
        match message.encode() {
            Ok(payload) => {
                outbound.write(OutboundSyncMessage {
                    entity: input.entity,
                    payload,
                });
            }
            Err(err) => logger::log_error(&format!("Slide intent for {:?} not sent: {}", input.entity, err)),
        }
    }
}
