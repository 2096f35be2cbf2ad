//! Posture компонент: стоит / сбит с ног.
//!
//! Наличие `StandingState` = capability "can be knocked down".
//! Сама posture система (анимации, auto-recovery) — внешняя.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct StandingState {
    /// Лежит ли актор
    pub down: bool,
    /// Может ли posture система сама поднять актора
    pub auto_recover: bool,
}

impl Default for StandingState {
    fn default() -> Self {
        Self {
            down: false,
            auto_recover: true,
        }
    }
}

impl StandingState {
    pub fn is_standing(&self) -> bool {
        !self.down
    }
}
