//! Mock collaborators для unit тестов (без App).

use bevy::prelude::*;

use crate::stamina::collaborators::{
    AlertPort, BodyMode, FlightPort, GravityPort, MovementSpeedPort, PhysicsPort, PosturePort,
};
use crate::stamina::components::{AlertCategory, StaminaAlert};

/// Записанный вызов collaborator'а.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    RefreshSpeed(Entity),
    ShowAlert(Entity, StaminaAlert),
    ClearAlert(Entity, AlertCategory),
    ScaleVelocity(Entity, f32),
    Damping(Entity, f32),
    BodyMode(Entity, BodyMode),
    ForceDown(Entity),
    StandUp(Entity),
    Weightless(Entity, bool),
}

/// Одно "тело" с capability флагами и журналом вызовов.
#[derive(Debug, Clone)]
pub struct MockWorld {
    pub velocity: Vec2,
    pub has_body: bool,
    pub knockable: bool,
    pub flying: bool,
    pub calls: Vec<Call>,
}

impl Default for MockWorld {
    fn default() -> Self {
        Self {
            velocity: Vec2::new(0.75, 1.0),
            has_body: true,
            knockable: true,
            flying: false,
            calls: Vec::new(),
        }
    }
}

impl MockWorld {
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl MovementSpeedPort for MockWorld {
    fn refresh_movement_speed(&mut self, entity: Entity) {
        self.calls.push(Call::RefreshSpeed(entity));
    }
}

impl AlertPort for MockWorld {
    fn show_alert(&mut self, entity: Entity, alert: StaminaAlert) {
        self.calls.push(Call::ShowAlert(entity, alert));
    }

    fn clear_alert(&mut self, entity: Entity, category: AlertCategory) {
        self.calls.push(Call::ClearAlert(entity, category));
    }
}

impl PhysicsPort for MockWorld {
    fn has_physical_body(&self, _entity: Entity) -> bool {
        self.has_body
    }

    fn scale_velocity(&mut self, entity: Entity, factor: f32) -> Vec2 {
        self.calls.push(Call::ScaleVelocity(entity, factor));
        self.velocity *= factor;
        self.velocity
    }

    fn add_linear_damping(&mut self, entity: Entity, delta: f32) {
        self.calls.push(Call::Damping(entity, delta));
    }

    fn set_body_mode(&mut self, entity: Entity, mode: BodyMode) {
        self.calls.push(Call::BodyMode(entity, mode));
    }
}

impl PosturePort for MockWorld {
    fn can_be_knocked_down(&self, _entity: Entity) -> bool {
        self.knockable
    }

    fn force_down(&mut self, entity: Entity) {
        self.calls.push(Call::ForceDown(entity));
    }

    fn stand_up(&mut self, entity: Entity) {
        self.calls.push(Call::StandUp(entity));
    }
}

impl GravityPort for MockWorld {
    fn set_weightless(&mut self, entity: Entity, weightless: bool) {
        self.calls.push(Call::Weightless(entity, weightless));
    }
}

impl FlightPort for MockWorld {
    fn is_flying(&self, _entity: Entity) -> bool {
        self.flying
    }
}

pub fn test_entity() -> Entity {
    Entity::from_raw(7)
}
