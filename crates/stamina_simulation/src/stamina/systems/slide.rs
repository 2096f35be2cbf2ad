//! SlideController: Idle → Sliding → Idle.
//!
//! Старт:
//! - Preconditions: не sliding, can_slide, не летит, есть тело, можно сбить с ног
//! - Cost вычитается через apply_delta (clamp в 0, stamina не гейтит slide)
//! - Velocity × factor, damping +, тело Dynamic, поза "down", weightless
//! - Длительность = |v.x| + |v.y| (секунды, velocity после умножения)
//!
//! Конец — по slide expiry sweep (0.1 sec accumulator), всегда natural expiry.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use super::bridge::SlideBridge;
use super::clock::PendingStaminaTicks;
use crate::config::StaminaConfig;
use crate::logger;
use crate::stamina::collaborators::{BodyMode, SlidePorts};
use crate::stamina::components::StaminaState;

/// Почему slide не начался. Все варианты non-fatal, state не изменён.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlideError {
    #[error("entity is already sliding")]
    AlreadySliding,
    #[error("sliding is disabled for this entity")]
    Disabled,
    #[error("entity is flying")]
    Flying,
    #[error("entity has no physical body")]
    NoPhysicalBody,
    #[error("entity cannot be knocked down")]
    CannotBeKnockedDown,
}

/// Успешный старт slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideStarted {
    /// Planar velocity после умножения
    pub velocity: Vec2,
    pub duration: Duration,
}

/// Event: slide закончился (natural expiry).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEnded {
    pub entity: Entity,
}

/// Проверка preconditions без мутаций.
pub fn check_slide_preconditions<P: SlidePorts>(
    entity: Entity,
    state: &StaminaState,
    ports: &P,
) -> Result<(), SlideError> {
    if state.is_sliding() {
        return Err(SlideError::AlreadySliding);
    }
    if !state.can_slide {
        return Err(SlideError::Disabled);
    }
    if ports.is_flying(entity) {
        return Err(SlideError::Flying);
    }
    if !ports.has_physical_body(entity) {
        return Err(SlideError::NoPhysicalBody);
    }
    if !ports.can_be_knocked_down(entity) {
        return Err(SlideError::CannotBeKnockedDown);
    }
    Ok(())
}

/// Попытка начать slide.
pub fn try_start_slide<P: SlidePorts>(
    entity: Entity,
    state: &mut StaminaState,
    ports: &mut P,
    config: &StaminaConfig,
) -> Result<SlideStarted, SlideError> {
    check_slide_preconditions(entity, state, ports)?;

    // slide_cost беззнаковый — направление задаём явно
    state.apply_delta(-f32::from(state.slide_cost));

    let velocity = ports.scale_velocity(entity, config.slide_velocity_factor);
    ports.add_linear_damping(entity, config.slide_damping);
    ports.set_body_mode(entity, BodyMode::Dynamic);
    ports.force_down(entity);
    ports.set_weightless(entity, true);

    let duration = slide_duration(velocity);
    state.begin_slide(duration);

    logger::log_info(&format!(
        "Entity {:?} slide started: velocity ({:.2}, {:.2}), duration {:.2}s, stamina {:.1}",
        entity,
        velocity.x,
        velocity.y,
        duration.as_secs_f32(),
        state.current()
    ));

    // Нулевая скорость — нулевой slide: сразу возвращаем тело в норму
    if duration.is_zero() {
        finish_slide(entity, ports, config);
    }

    Ok(SlideStarted { velocity, duration })
}

/// Один шаг expiry sweep для entity. true — slide закончился и эффекты сняты.
pub fn tick_slide<P: SlidePorts>(
    entity: Entity,
    state: &mut StaminaState,
    ports: &mut P,
    elapsed: Duration,
    config: &StaminaConfig,
) -> bool {
    if !state.tick_slide(elapsed) {
        return false;
    }
    finish_slide(entity, ports, config);
    true
}

/// Снять эффекты slide: гравитация, поза, damping, режим тела.
fn finish_slide<P: SlidePorts>(entity: Entity, ports: &mut P, config: &StaminaConfig) {
    ports.set_weightless(entity, false);
    ports.stand_up(entity);
    ports.add_linear_damping(entity, -config.slide_damping);
    ports.set_body_mode(entity, BodyMode::Kinematic);
    logger::log(&format!("Entity {:?} slide ended", entity));
}

/// |v.x| + |v.y| секунд. NaN/inf дают ноль, конечное переполнение — `Duration::MAX`.
pub fn slide_duration(velocity: Vec2) -> Duration {
    let secs = velocity.x.abs() + velocity.y.abs();
    if !secs.is_finite() {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

/// Система: slide expiry sweep (только в тиках, где сработал 0.1 sec accumulator).
pub fn sweep_slide_expiry(
    pending: Res<PendingStaminaTicks>,
    config: Res<StaminaConfig>,
    mut query: Query<(Entity, &mut StaminaState)>,
    mut bridge: SlideBridge,
    mut ended_events: EventWriter<SlideEnded>,
) {
    let Some(elapsed) = pending.0.slide_elapsed else {
        return;
    };

    for (entity, mut state) in query.iter_mut() {
        if !state.is_sliding() {
            continue;
        }
        if tick_slide(entity, &mut state, &mut bridge, elapsed, &config) {
            ended_events.write(SlideEnded { entity });
        }
    }
}
