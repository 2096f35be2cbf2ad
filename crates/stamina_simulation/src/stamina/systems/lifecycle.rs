//! Lifecycle: новая StaminaState получает стартовую stamina.
//!
//! Стартовые эффекты (alert clear, base regen) отправит обычный dispatch:
//! у новой state `last_dispatched` пустой.

use bevy::prelude::*;
use rand::Rng;

use crate::config::StaminaConfig;
use crate::stamina::components::{StaminaState, ThresholdLevel};
use crate::DeterministicRng;

/// Диапазон случайной стартовой stamina: [Normal + 10, Energetic - 1).
pub fn spawn_stamina_range() -> std::ops::Range<f32> {
    (ThresholdLevel::Normal.min_stamina() + 10.0)..(ThresholdLevel::Energetic.min_stamina() - 1.0)
}

/// Система: инициализация только что добавленных StaminaState.
pub fn init_new_stamina(
    config: Res<StaminaConfig>,
    rng: Option<ResMut<DeterministicRng>>,
    mut query: Query<&mut StaminaState, Added<StaminaState>>,
) {
    if !config.randomize_spawn_stamina {
        return;
    }
    let Some(mut rng) = rng else {
        return;
    };

    for mut state in query.iter_mut() {
        let target = rng.rng.gen_range(spawn_stamina_range());
        let delta = target - state.current();
        state.apply_delta(delta);
    }
}
