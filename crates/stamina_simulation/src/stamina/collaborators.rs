//! Collaborator ports — всё, что stamina core просит у внешних систем.
//!
//! Core сам не двигает тела, не рисует alert'ы и не управляет позой: он
//! вызывает эти trait'ы. ECS реализации живут в `systems::bridge`, в тестах
//! подставляются mock'и.

use bevy::prelude::*;

use super::components::{AlertCategory, StaminaAlert};

/// Режим тела для physics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum BodyMode {
    /// Dynamic нужен чтобы linear damping реально применялся во время slide
    Dynamic,
    Kinematic,
}

pub trait MovementSpeedPort {
    /// Пересчитать модификаторы скорости (сам множитель считает collaborator).
    fn refresh_movement_speed(&mut self, entity: Entity);
}

pub trait AlertPort {
    fn show_alert(&mut self, entity: Entity, alert: StaminaAlert);
    fn clear_alert(&mut self, entity: Entity, category: AlertCategory);
}

pub trait PhysicsPort {
    /// Есть ли у entity физическое тело.
    fn has_physical_body(&self, entity: Entity) -> bool;
    /// Умножить linear velocity, вернуть planar velocity после умножения.
    fn scale_velocity(&mut self, entity: Entity, factor: f32) -> Vec2;
    fn add_linear_damping(&mut self, entity: Entity, delta: f32);
    fn set_body_mode(&mut self, entity: Entity, mode: BodyMode);
}

pub trait PosturePort {
    fn can_be_knocked_down(&self, entity: Entity) -> bool;
    /// Knocked down без auto-recovery.
    fn force_down(&mut self, entity: Entity);
    fn stand_up(&mut self, entity: Entity);
}

pub trait GravityPort {
    fn set_weightless(&mut self, entity: Entity, weightless: bool);
}

pub trait FlightPort {
    fn is_flying(&self, entity: Entity) -> bool;
}

/// Всё, что нужно EffectDispatcher.
pub trait EffectPorts: MovementSpeedPort + AlertPort {}

impl<T: MovementSpeedPort + AlertPort> EffectPorts for T {}

/// Всё, что нужно SlideController.
pub trait SlidePorts: PhysicsPort + PosturePort + GravityPort + FlightPort {}

impl<T: PhysicsPort + PosturePort + GravityPort + FlightPort> SlidePorts for T {}
