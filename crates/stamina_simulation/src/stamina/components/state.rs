//! StaminaState — per-entity stamina record.
//!
//! Инварианты:
//! - 0 ≤ current ≤ MAX_STAMINA
//! - threshold == compute_threshold(current) после каждой мутации
//! - actual_regen == (base_regen + regen_added) * regen_multiplier
//!
//! `current` меняется только через `apply_delta`, поэтому поля приватные.

use std::time::Duration;

use bevy::prelude::*;

use super::threshold::{compute_threshold, ThresholdLevel, MAX_STAMINA};
use crate::sync::StaminaSnapshot;

/// Стоимость slide по умолчанию (stamina points)
pub const DEFAULT_SLIDE_COST: u8 = 200;

/// Выносливость актора + состояние slide.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct StaminaState {
    current: f32,
    threshold: ThresholdLevel,

    base_regen: f32,
    regen_added: f32,
    regen_multiplier: i8,
    actual_regen: f32,

    /// Может ли актор вообще делать slide
    pub can_slide: bool,
    /// Сколько stamina стоит slide (вычитается, не гейтит)
    pub slide_cost: u8,
    /// Stimulated: regen никогда не восстанавливает, только тратит
    pub stimulated: bool,
    /// Сколько regen тиков пропустить (каждый пропуск уменьшает счётчик)
    pub no_regen_ticks: u8,

    slide_remaining: Duration,
    last_dispatched: Option<ThresholdLevel>,
}

impl Default for StaminaState {
    fn default() -> Self {
        Self::new()
    }
}

impl StaminaState {
    /// Новое состояние: stamina на уровне Normal, эффекты ещё не отправлены.
    pub fn new() -> Self {
        let base_regen = ThresholdLevel::Normal.base_regen();
        Self {
            current: ThresholdLevel::Normal.min_stamina(),
            threshold: ThresholdLevel::Normal,
            base_regen,
            regen_added: 0.0,
            regen_multiplier: 1,
            actual_regen: base_regen,
            can_slide: true,
            slide_cost: DEFAULT_SLIDE_COST,
            stimulated: false,
            no_regen_ticks: 0,
            slide_remaining: Duration::ZERO,
            last_dispatched: None,
        }
    }

    pub fn with_slide_cost(mut self, slide_cost: u8) -> Self {
        self.slide_cost = slide_cost;
        self
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        MAX_STAMINA
    }

    pub fn threshold(&self) -> ThresholdLevel {
        self.threshold
    }

    pub fn last_dispatched_threshold(&self) -> Option<ThresholdLevel> {
        self.last_dispatched
    }

    pub fn base_regen(&self) -> f32 {
        self.base_regen
    }

    pub fn regen_added(&self) -> f32 {
        self.regen_added
    }

    pub fn regen_multiplier(&self) -> i8 {
        self.regen_multiplier
    }

    pub fn actual_regen(&self) -> f32 {
        self.actual_regen
    }

    pub fn slide_remaining(&self) -> Duration {
        self.slide_remaining
    }

    pub fn slide_remaining_secs(&self) -> f32 {
        self.slide_remaining.as_secs_f32()
    }

    /// Sliding = slide_remaining > 0 (отдельного множества sliding entities нет)
    pub fn is_sliding(&self) -> bool {
        !self.slide_remaining.is_zero()
    }

    /// Единственный путь изменения `current`.
    ///
    /// Clamp в [0, max], затем пересчёт threshold. Возвращает true если
    /// после изменения есть неотправленная смена threshold.
    pub fn apply_delta(&mut self, amount: f32) -> bool {
        if !amount.is_nan() {
            self.set_current(self.current + amount);
        }
        self.needs_dispatch()
    }

    /// Вернуть stamina на уровень Normal.
    pub fn reset(&mut self) -> bool {
        self.apply_delta(ThresholdLevel::Normal.min_stamina() - self.current)
    }

    /// Threshold изменился с момента последнего dispatch.
    pub fn needs_dispatch(&self) -> bool {
        self.last_dispatched != Some(self.threshold)
    }

    pub fn set_regen_added(&mut self, regen_added: f32) {
        self.regen_added = regen_added;
        self.refresh_regen();
    }

    pub fn set_regen_multiplier(&mut self, regen_multiplier: i8) {
        self.regen_multiplier = regen_multiplier;
        self.refresh_regen();
    }

    /// Snapshot авторитетного подмножества полей.
    pub fn snapshot(&self) -> StaminaSnapshot {
        StaminaSnapshot {
            current_stamina: self.current,
            can_slide: self.can_slide,
            slide_cost: self.slide_cost,
            actual_regen: self.actual_regen,
            stimulated: self.stimulated,
        }
    }

    /// Observer side: перезаписать mirror поля из snapshot.
    ///
    /// Threshold выводится той же `THRESHOLD_TABLE`; observer эффекты не
    /// dispatch'ит, поэтому threshold сразу помечается отправленным.
    pub fn apply_snapshot(&mut self, snapshot: &StaminaSnapshot) {
        if !snapshot.current_stamina.is_nan() {
            self.set_current(snapshot.current_stamina);
        }
        self.can_slide = snapshot.can_slide;
        self.slide_cost = snapshot.slide_cost;
        self.actual_regen = snapshot.actual_regen;
        self.stimulated = snapshot.stimulated;
        self.last_dispatched = Some(self.threshold);
    }

    /// Зафиксировать dispatch текущего threshold: base regen из таблицы уровня.
    pub(crate) fn mark_dispatched(&mut self) -> ThresholdLevel {
        let threshold = self.threshold;
        self.last_dispatched = Some(threshold);
        self.base_regen = threshold.base_regen();
        self.refresh_regen();
        threshold
    }

    pub(crate) fn begin_slide(&mut self, duration: Duration) {
        self.slide_remaining = duration;
    }

    /// Добавить к идущему slide время, которое ближайший sweep спишет
    /// за период до старта.
    pub(crate) fn credit_slide(&mut self, uncharged: Duration) {
        if self.is_sliding() {
            self.slide_remaining = self.slide_remaining.saturating_add(uncharged);
        }
    }

    /// Уменьшить slide таймер. true — slide закончился на этом шаге.
    pub(crate) fn tick_slide(&mut self, elapsed: Duration) -> bool {
        if self.slide_remaining.is_zero() {
            return false;
        }
        self.slide_remaining = self.slide_remaining.saturating_sub(elapsed);
        self.slide_remaining.is_zero()
    }

    fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, MAX_STAMINA);
        self.threshold = compute_threshold(self.current);
    }

    fn refresh_regen(&mut self) {
        self.actual_regen = (self.base_regen + self.regen_added) * f32::from(self.regen_multiplier);
    }
}
