//! Stamina domain: thresholds, regen, slide, effects.
//!
//! ECS ответственность:
//! - Game state: StaminaState (current, threshold, regen, slide timer)
//! - Rules: когда и на сколько меняется stamina, можно ли начать slide
//! - Requests: movement speed refresh, alerts, physics/posture/gravity
//!
//! Внешняя ответственность (движок / другие системы):
//! - Физика тела, расчёт множителя скорости, UI alert'ов, анимация позы

use bevy::prelude::*;

pub mod collaborators;
pub mod components;
pub mod events;
pub mod systems;

pub use collaborators::*;
pub use components::*;
pub use events::*;
pub use systems::*;

use crate::config::StaminaConfig;
use crate::physics::sync_ignore_gravity;

/// Фазы stamina тика в FixedUpdate (строго по порядку).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaminaSet {
    /// Новые StaminaState + Advance(dt)
    Advance,
    /// Slide запросы (authority sync кладёт сюда свои системы)
    Intents,
    /// Slide expiry sweep + regen sweep
    Sweeps,
    /// EffectDispatcher
    Dispatch,
    /// Snapshots наружу
    Replicate,
}

/// Stamina Plugin (authoritative simulation).
///
/// Регистрирует stamina системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. init_new_stamina — стартовая stamina новых entities
/// 2. advance_stamina_clocks — regen (1 sec) и slide (0.1 sec) accumulators
/// 3. sweep_slide_expiry — окончание slide'ов
/// 4. run_regen_steps — regen шаги
/// 5. dispatch_threshold_effects — эффекты на смену threshold
/// 6. sync_ignore_gravity — IgnoreGravity → rapier GravityScale
pub struct StaminaPlugin;

impl Plugin for StaminaPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world_mut()
            .remove_resource::<StaminaConfig>()
            .unwrap_or_default()
            .or_default_if_invalid();

        app.insert_resource(config)
            .init_resource::<StaminaClocks>()
            .init_resource::<PendingStaminaTicks>();

        app.add_event::<RefreshMovementSpeed>()
            .add_event::<AlertRequest>()
            .add_event::<ThresholdChanged>()
            .add_event::<SlideEnded>();

        app.configure_sets(
            FixedUpdate,
            (
                StaminaSet::Advance,
                StaminaSet::Intents,
                StaminaSet::Sweeps,
                StaminaSet::Dispatch,
                StaminaSet::Replicate,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (init_new_stamina, advance_stamina_clocks)
                    .chain()
                    .in_set(StaminaSet::Advance),
                // Sweeps независимы друг от друга; chain только для детерминизма
                (sweep_slide_expiry, run_regen_steps)
                    .chain()
                    .in_set(StaminaSet::Sweeps),
                (dispatch_threshold_effects, sync_ignore_gravity)
                    .chain()
                    .in_set(StaminaSet::Dispatch),
            ),
        );
    }
}
