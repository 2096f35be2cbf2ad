//! Stamina events — запросы к внешним системам (movement speed, alerts).
//!
//! ECS пишет, внешний слой (UI / movement) читает и исполняет.

use bevy::prelude::*;

use super::components::{AlertCategory, StaminaAlert};

/// Event: пересчитать модификаторы скорости движения entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshMovementSpeed {
    pub entity: Entity,
}

/// Event: показать / очистить stamina alert.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertRequest {
    Show { entity: Entity, alert: StaminaAlert },
    Clear { entity: Entity, category: AlertCategory },
}
