//! EffectDispatcher: реакция на смену threshold (только на смену, не каждый тик).

use bevy::prelude::*;

use super::bridge::EffectBridge;
use crate::logger;
use crate::stamina::collaborators::EffectPorts;
use crate::stamina::components::{AlertCategory, StaminaState, ThresholdLevel};

/// Event: threshold сменился и эффекты отправлены.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdChanged {
    pub entity: Entity,
    pub previous: Option<ThresholdLevel>,
    pub current: ThresholdLevel,
}

/// Dispatch эффектов для одного entity.
///
/// No-op если threshold == last dispatched. Иначе: base regen из таблицы
/// уровня, пересчёт actual regen, refresh скорости (для movement-affecting
/// уровней), show/clear alert. Возвращает отправленный threshold.
pub fn dispatch_effects<P: EffectPorts>(
    entity: Entity,
    state: &mut StaminaState,
    ports: &mut P,
) -> Option<ThresholdLevel> {
    if !state.needs_dispatch() {
        return None;
    }

    let threshold = state.mark_dispatched();

    if threshold.affects_movement() {
        ports.refresh_movement_speed(entity);
    }

    match threshold.alert() {
        Some(alert) => ports.show_alert(entity, alert),
        None => ports.clear_alert(entity, AlertCategory::Stamina),
    }

    Some(threshold)
}

/// Система: dispatch для всех entities с неотправленной сменой threshold.
///
/// Запускается после regen/slide, поэтому несколько дельт за тик дают не
/// больше одного dispatch.
pub fn dispatch_threshold_effects(
    mut query: Query<(Entity, &mut StaminaState)>,
    mut bridge: EffectBridge,
    mut changed_events: EventWriter<ThresholdChanged>,
) {
    for (entity, mut state) in query.iter_mut() {
        if !state.needs_dispatch() {
            continue;
        }

        let previous = state.last_dispatched_threshold();
        if let Some(current) = dispatch_effects(entity, &mut state, &mut bridge) {
            logger::log(&format!(
                "Entity {:?} stamina threshold {:?} → {:?} (regen {:.1}/s)",
                entity,
                previous,
                current,
                state.actual_regen()
            ));
            changed_events.write(ThresholdChanged {
                entity,
                previous,
                current,
            });
        }
    }
}
