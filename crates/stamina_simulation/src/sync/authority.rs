//! Authority side sync adapter.
//!
//! - Inbound: decode slide intents → `SlideRequested`
//! - `SlideRequested` → SlideController (silent reject если не прошли проверки)
//! - Outbound: snapshot только когда авторитетные поля реально изменились

use bevy::prelude::*;

use super::protocol::{InboundSyncMessage, OutboundSyncMessage, StaminaSnapshot, SyncMessage, TargetCoordinates};
use crate::config::StaminaConfig;
use crate::logger;
use crate::stamina::components::StaminaState;
use crate::stamina::systems::{try_start_slide, PendingStaminaTicks, SlideBridge, StaminaClocks};

/// Event: запрос slide (из сети или от локального контроллера/AI).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SlideRequested {
    pub entity: Entity,
    pub target: TargetCoordinates,
}

/// Последний отправленный snapshot (duplicate suppression).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LastSentSnapshot(pub StaminaSnapshot);

/// Система: decode inbound payloads в slide запросы.
pub fn receive_slide_intents(
    mut inbound: EventReader<InboundSyncMessage>,
    mut requests: EventWriter<SlideRequested>,
) {
    for message in inbound.read() {
        match SyncMessage::decode(&message.payload) {
            Ok(SyncMessage::SlideIntent(intent)) => {
                requests.write(SlideRequested {
                    entity: message.entity,
                    target: intent.target_coordinates,
                });
            }
            Ok(SyncMessage::Snapshot(_)) => {
                logger::log_warning(&format!(
                    "Authority received a stamina snapshot for {:?}, ignoring",
                    message.entity
                ));
            }
            Err(err) => {
                logger::log_warning(&format!("Dropping inbound message for {:?}: {}", message.entity, err));
            }
        }
    }
}

/// Система: выполнить slide запросы.
///
/// Clocks уже продвинуты на этот тик: время до старта, которое спишет
/// ближайший sweep, добавляется к таймеру нового slide.
pub fn handle_slide_requests(
    mut requests: EventReader<SlideRequested>,
    config: Res<StaminaConfig>,
    clocks: Res<StaminaClocks>,
    pending: Res<PendingStaminaTicks>,
    mut states: Query<&mut StaminaState>,
    mut bridge: SlideBridge,
) {
    for request in requests.read() {
        let Ok(mut state) = states.get_mut(request.entity) else {
            logger::log(&format!("Slide request for {:?} without stamina, ignoring", request.entity));
            continue;
        };

        match try_start_slide(request.entity, &mut state, &mut bridge, &config) {
            Ok(_) => state.credit_slide(clocks.uncharged_slide_time(&pending.0)),
            Err(reason) => logger::log(&format!(
                "Slide rejected for {:?} (target {:.1}, {:.1}): {}",
                request.entity, request.target.x, request.target.y, reason
            )),
        }
    }
}

/// Система: snapshot для каждой изменившейся StaminaState.
pub fn publish_snapshots(
    mut commands: Commands,
    mut query: Query<(Entity, &StaminaState, Option<&mut LastSentSnapshot>), Changed<StaminaState>>,
    mut outbound: EventWriter<OutboundSyncMessage>,
) {
    for (entity, state, last_sent) in query.iter_mut() {
        let snapshot = state.snapshot();
        if last_sent.as_ref().is_some_and(|last| last.0 == snapshot) {
            continue;
        }

        let payload = match SyncMessage::Snapshot(snapshot).encode() {
            Ok(payload) => payload,
            Err(err) => {
                logger::log_error(&format!("Stamina snapshot for {:?} not sent: {}", entity, err));
                continue;
            }
        };
        outbound.write(OutboundSyncMessage { entity, payload });

        match last_sent {
            Some(mut last) => last.0 = snapshot,
            None => {
                commands.entity(entity).insert(LastSentSnapshot(snapshot));
            }
        }
    }
}
