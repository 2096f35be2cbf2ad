//! Headless stamina симуляция
//!
//! Запускает Bevy App без рендера: несколько акторов, периодические slide
//! запросы, лог threshold переходов.

use std::time::Duration;

use bevy::prelude::*;
use stamina_simulation::logger;
use stamina_simulation::{
    create_headless_app, spawn_stamina_actor, SimulationPlugin, SlideRequested, StaminaConfig,
    StaminaState, TargetCoordinates, ThresholdChanged, SIMULATION_HZ,
};

const ACTOR_COUNT: usize = 8;
const TICK_COUNT: u32 = 1200;
/// Каждые 3 секунды кто-то из акторов пробует slide
const SLIDE_EVERY_TICKS: u32 = 180;

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed, Duration::from_secs_f64(1.0 / SIMULATION_HZ));
    logger::log_info(&format!("Starting headless stamina simulation (seed: {})", seed));

    app.insert_resource(StaminaConfig {
        randomize_spawn_stamina: true,
        ..Default::default()
    })
    .add_plugins(SimulationPlugin);

    let actors: Vec<Entity> = {
        let world = app.world_mut();
        let actors = {
            let mut commands = world.commands();
            (0..ACTOR_COUNT)
                .map(|i| {
                    spawn_stamina_actor(
                        &mut commands,
                        Vec3::new(i as f32 * 2.0, 0.0, 0.0),
                        Vec3::new(1.0, 0.0, 0.5),
                        StaminaState::new(),
                    )
                })
                .collect()
        };
        world.flush();
        actors
    };

    for tick in 0..TICK_COUNT {
        if tick > 0 && tick % SLIDE_EVERY_TICKS == 0 {
            let entity = actors[(tick / SLIDE_EVERY_TICKS) as usize % actors.len()];
            app.world_mut().send_event(SlideRequested {
                entity,
                target: TargetCoordinates {
                    x: 0.0,
                    y: 0.0,
                    frame_id: u64::from(tick),
                },
            });
        }

        app.update();

        let changes: Vec<ThresholdChanged> = app
            .world_mut()
            .resource_mut::<Events<ThresholdChanged>>()
            .drain()
            .collect();
        for change in changes {
            logger::log_info(&format!(
                "Tick {}: {:?} {:?} → {:?}",
                tick, change.entity, change.previous, change.current
            ));
        }

        if tick % 300 == 0 {
            let mut query = app.world_mut().query::<&StaminaState>();
            let total: f32 = query.iter(app.world()).map(|s| s.current()).sum();
            logger::log_info(&format!(
                "Tick {}: {} actors, average stamina {:.1}",
                tick,
                actors.len(),
                total / actors.len() as f32
            ));
        }
    }

    logger::log_info("Simulation complete!");
}
