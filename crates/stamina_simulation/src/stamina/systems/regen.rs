//! RegenScheduler: раз в симулированную секунду двигаем stamina каждого актора.

use bevy::prelude::*;

use super::clock::PendingStaminaTicks;
use crate::stamina::components::{StaminaState, ThresholdLevel};

/// Один regen шаг.
///
/// Ниже Energetic и не stimulated — восстанавливаем `actual_regen`, иначе
/// тратим его ("use it or lose it" для energized бонуса). Возвращает
/// применённую дельту, `None` если шаг пропущен по `no_regen_ticks`.
pub fn regen_step(state: &mut StaminaState) -> Option<f32> {
    if state.no_regen_ticks > 0 {
        state.no_regen_ticks -= 1;
        return None;
    }

    let restoring =
        state.current() < ThresholdLevel::Energetic.min_stamina() && !state.stimulated;
    let delta = if restoring {
        state.actual_regen()
    } else {
        -state.actual_regen()
    };
    state.apply_delta(delta);
    Some(delta)
}

/// Система: выполнить накопленные regen шаги для всех entities.
///
/// Entities независимы друг от друга, порядок не влияет на результат.
pub fn run_regen_steps(pending: Res<PendingStaminaTicks>, mut query: Query<&mut StaminaState>) {
    let steps = pending.0.regen_steps;
    if steps == 0 {
        return;
    }

    for mut state in query.iter_mut() {
        for _ in 0..steps {
            regen_step(&mut state);
        }
    }
}
