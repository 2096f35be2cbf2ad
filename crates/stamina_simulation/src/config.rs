//! Stamina configuration resource.
//!
//! Загрузка из файлов — не наша задача: resource вставляется кодом (или
//! десериализуется вызывающей стороной через serde).

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logger;

/// Параметры stamina симуляции.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaminaConfig {
    /// Период regen шага (1 sec)
    pub regen_interval: Duration,
    /// Период slide expiry sweep (0.1 sec), отдельный accumulator
    pub slide_sweep_interval: Duration,
    /// Максимум regen шагов за один Advance (остаток ждёт следующего тика)
    pub max_regen_catch_up: u32,
    /// Множитель velocity при старте slide
    pub slide_velocity_factor: f32,
    /// Прибавка к linear damping на время slide
    pub slide_damping: f32,
    /// Случайная стартовая stamina в [Normal + 10, Energetic - 1)
    pub randomize_spawn_stamina: bool,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            regen_interval: Duration::from_secs(1),
            slide_sweep_interval: Duration::from_millis(100),
            max_regen_catch_up: 5,
            slide_velocity_factor: 4.0,
            slide_damping: 1.5,
            randomize_spawn_stamina: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("max_regen_catch_up must be at least 1")]
    ZeroCatchUp,
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f32 },
}

impl StaminaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regen_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("regen_interval"));
        }
        if self.slide_sweep_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("slide_sweep_interval"));
        }
        if self.max_regen_catch_up == 0 {
            return Err(ConfigError::ZeroCatchUp);
        }
        for (name, value) in [
            ("slide_velocity_factor", self.slide_velocity_factor),
            ("slide_damping", self.slide_damping),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Вернуть себя если валиден, иначе default (с error логом).
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                logger::log_error(&format!("Invalid StaminaConfig ({err}), falling back to defaults"));
                Self::default()
            }
        }
    }
}
