//! ECS реализации collaborator ports.
//!
//! - Physics: rapier `Velocity` / `Damping` / `RigidBody`
//! - Posture: `StandingState`
//! - Gravity: `IgnoreGravity` (в `GravityScale` его переводит physics adapter)
//! - Flight: `Flying` marker
//! - Movement speed / alerts: events для внешнего слоя

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{Damping, GravityScale, RigidBody, Velocity};

use crate::components::{Flying, IgnoreGravity, StandingState};
use crate::stamina::collaborators::{
    AlertPort, BodyMode, FlightPort, GravityPort, MovementSpeedPort, PhysicsPort, PosturePort,
};
use crate::stamina::components::{AlertCategory, StaminaAlert};
use crate::stamina::events::{AlertRequest, RefreshMovementSpeed};

/// Collaborators для SlideController.
#[derive(SystemParam)]
pub struct SlideBridge<'w, 's> {
    bodies: Query<'w, 's, (&'static mut Velocity, &'static mut Damping, &'static mut RigidBody)>,
    postures: Query<'w, 's, &'static mut StandingState>,
    gravity: Query<'w, 's, &'static mut IgnoreGravity>,
    scales: Query<'w, 's, &'static GravityScale>,
    flying: Query<'w, 's, (), With<Flying>>,
    commands: Commands<'w, 's>,
}

impl PhysicsPort for SlideBridge<'_, '_> {
    fn has_physical_body(&self, entity: Entity) -> bool {
        self.bodies.contains(entity)
    }

    fn scale_velocity(&mut self, entity: Entity, factor: f32) -> Vec2 {
        let Ok((mut velocity, _, _)) = self.bodies.get_mut(entity) else {
            return Vec2::ZERO;
        };
        velocity.linvel *= factor;
        // Y — вверх, плоскость движения XZ
        Vec2::new(velocity.linvel.x, velocity.linvel.z)
    }

    fn add_linear_damping(&mut self, entity: Entity, delta: f32) {
        if let Ok((_, mut damping, _)) = self.bodies.get_mut(entity) {
            damping.linear_damping = (damping.linear_damping + delta).max(0.0);
        }
    }

    fn set_body_mode(&mut self, entity: Entity, mode: BodyMode) {
        if let Ok((_, _, mut body)) = self.bodies.get_mut(entity) {
            *body = match mode {
                BodyMode::Dynamic => RigidBody::Dynamic,
                BodyMode::Kinematic => RigidBody::KinematicVelocityBased,
            };
        }
    }
}

impl PosturePort for SlideBridge<'_, '_> {
    fn can_be_knocked_down(&self, entity: Entity) -> bool {
        self.postures.contains(entity)
    }

    fn force_down(&mut self, entity: Entity) {
        if let Ok(mut posture) = self.postures.get_mut(entity) {
            posture.down = true;
            posture.auto_recover = false;
        }
    }

    fn stand_up(&mut self, entity: Entity) {
        if let Ok(mut posture) = self.postures.get_mut(entity) {
            posture.down = false;
            posture.auto_recover = true;
        }
    }
}

impl GravityPort for SlideBridge<'_, '_> {
    fn set_weightless(&mut self, entity: Entity, weightless: bool) {
        if let Ok(mut gravity) = self.gravity.get_mut(entity) {
            gravity.weightless = weightless;
        } else {
            // Вернуть после slide тот scale, что был у тела
            let gravity_scale = self.scales.get(entity).map_or(1.0, |scale| scale.0);
            self.commands.entity(entity).insert(IgnoreGravity {
                weightless,
                gravity_scale,
            });
        }
    }
}

impl FlightPort for SlideBridge<'_, '_> {
    fn is_flying(&self, entity: Entity) -> bool {
        self.flying.contains(entity)
    }
}

/// Collaborators для EffectDispatcher.
#[derive(SystemParam)]
pub struct EffectBridge<'w> {
    speed_events: EventWriter<'w, RefreshMovementSpeed>,
    alert_events: EventWriter<'w, AlertRequest>,
}

impl MovementSpeedPort for EffectBridge<'_> {
    fn refresh_movement_speed(&mut self, entity: Entity) {
        self.speed_events.write(RefreshMovementSpeed { entity });
    }
}

impl AlertPort for EffectBridge<'_> {
    fn show_alert(&mut self, entity: Entity, alert: StaminaAlert) {
        self.alert_events.write(AlertRequest::Show { entity, alert });
    }

    fn clear_alert(&mut self, entity: Entity, category: AlertCategory) {
        self.alert_events.write(AlertRequest::Clear { entity, category });
    }
}
