//! Stamina Simulation Core
//!
//! ECS-симуляция выносливости на Bevy 0.16:
//! - thresholds + effect dispatch (movement speed, alerts, base regen)
//! - regen раз в симулированную секунду
//! - slide (скольжение) с таймером и physics/posture/gravity эффектами
//! - authority ↔ observer репликация (snapshots + slide intents)
//!
//! Авторитетная симуляция идёт в FixedUpdate; observer только зеркалит.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod logger;
pub mod physics;
pub mod stamina;
pub mod sync;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use config::{ConfigError, StaminaConfig};
pub use physics::{spawn_stamina_actor, sync_ignore_gravity};
pub use stamina::{
    compute_threshold, AlertCategory, AlertRequest, RefreshMovementSpeed, SlideEnded, SlideError,
    StaminaAlert, StaminaPlugin, StaminaSet, StaminaState, ThresholdChanged, ThresholdLevel,
    MAX_STAMINA, THRESHOLD_TABLE,
};
pub use sync::{
    AuthoritySyncPlugin, InboundSyncMessage, ObserverSyncPlugin, OutboundSyncMessage, SlideInput,
    SlideRequested, StaminaSnapshot, SyncMessage, TargetCoordinates,
};

pub use logger::init_logger;

/// Частота авторитетного simulation tick
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin авторитетной симуляции (stamina + authority sync)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Детерминистичный RNG (seed по умолчанию, если хост не задал свой)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .register_type::<StaminaState>()
            .register_type::<StandingState>()
            .register_type::<IgnoreGravity>()
            .register_type::<Flying>()
            .add_plugins(AuthoritySyncPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции.
///
/// Время ручное: каждый `app.update()` = ровно `tick` симулированного
/// времени, fixed timestep совпадает с ним (один FixedUpdate на update).
/// Первый update только стартует часы (delta = 0).
pub fn create_headless_app(seed: u64, tick: Duration) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
