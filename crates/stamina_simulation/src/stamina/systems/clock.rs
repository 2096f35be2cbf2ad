//! Stamina clocks: два независимых accumulator'а поверх fixed timestep.
//!
//! - regen: 1 sec (coarse resource regen)
//! - slide expiry: 0.1 sec (responsive slide cutoff)
//!
//! Не объединять: у них разные требования к latency.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::StaminaConfig;
use crate::logger;

/// Результат одного Advance(dt).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTicks {
    /// Сколько regen шагов выполнить в этом тике
    pub regen_steps: u32,
    /// Elapsed для slide sweep (None — sweep не в этом тике)
    pub slide_elapsed: Option<Duration>,
}

/// Accumulators для regen и slide sweep.
#[derive(Resource, Debug, Clone, Default)]
pub struct StaminaClocks {
    regen_accumulated: Duration,
    slide_accumulated: Duration,
}

impl StaminaClocks {
    /// Advance(dt): накопить время, вернуть сколько шагов пора выполнить.
    ///
    /// Regen тики не теряются: сверх `max_regen_catch_up` они остаются в
    /// accumulator и выполняются в следующих вызовах.
    pub fn advance(&mut self, dt: Duration, config: &StaminaConfig) -> ClockTicks {
        self.regen_accumulated += dt;
        self.slide_accumulated += dt;

        let mut regen_steps = 0;
        while self.regen_accumulated >= config.regen_interval
            && regen_steps < config.max_regen_catch_up
        {
            self.regen_accumulated -= config.regen_interval;
            regen_steps += 1;
        }
        if self.regen_accumulated >= config.regen_interval {
            logger::log_warning(&format!(
                "Stamina regen catch-up capped at {} steps ({:.2}s still pending)",
                config.max_regen_catch_up,
                self.regen_accumulated.as_secs_f32()
            ));
        }

        let slide_elapsed = if self.slide_accumulated >= config.slide_sweep_interval {
            Some(std::mem::take(&mut self.slide_accumulated))
        } else {
            None
        };

        ClockTicks {
            regen_steps,
            slide_elapsed,
        }
    }

    pub fn pending_regen(&self) -> Duration {
        self.regen_accumulated
    }

    /// Сколько спишет ближайший slide sweep за время, уже прошедшее к этому
    /// моменту тика (sweep этого тика или ещё накапливаемое).
    pub fn uncharged_slide_time(&self, ticks: &ClockTicks) -> Duration {
        ticks.slide_elapsed.unwrap_or(self.slide_accumulated)
    }
}

/// Ticks текущего fixed шага (пишет `advance_stamina_clocks`, читают sweep'ы).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PendingStaminaTicks(pub ClockTicks);

/// Система: Advance(dt) от `Time<Fixed>`.
pub fn advance_stamina_clocks(
    time: Res<Time<Fixed>>,
    config: Res<StaminaConfig>,
    mut clocks: ResMut<StaminaClocks>,
    mut pending: ResMut<PendingStaminaTicks>,
) {
    pending.0 = clocks.advance(time.delta(), &config);
}
