//! Slide-capable тело: rapier компоненты + gravity override.
//!
//! Архитектура:
//! - Rapier: RigidBody + Velocity + Damping + GravityScale
//! - Вне slide тело KinematicVelocityBased, во время slide — Dynamic
//!   (иначе linear damping не применяется)
//! - Плоскость движения XZ (Y — вверх)

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{IgnoreGravity, StandingState};
use crate::stamina::components::StaminaState;

/// Система: IgnoreGravity → rapier GravityScale.
pub fn sync_ignore_gravity(
    mut query: Query<(&IgnoreGravity, &mut GravityScale), Changed<IgnoreGravity>>,
) {
    for (ignore, mut scale) in query.iter_mut() {
        scale.0 = if ignore.weightless {
            0.0
        } else {
            ignore.gravity_scale
        };
    }
}

/// Spawn helper: актор со stamina и телом, которое может slide.
///
/// - Transform
/// - StaminaState (Normal)
/// - StandingState (can be knocked down)
/// - Rapier: RigidBody + Velocity + Damping + GravityScale
pub fn spawn_stamina_actor(
    commands: &mut Commands,
    position: Vec3,
    velocity: Vec3,
    stamina: StaminaState,
) -> Entity {
    commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position),

            // Наши компоненты
            stamina,
            StandingState::default(),
            IgnoreGravity::default(),

            // Rapier physics
            RigidBody::KinematicVelocityBased,
            Velocity::linear(velocity),
            Damping::default(),
            GravityScale(1.0),
        ))
        .id()
}
