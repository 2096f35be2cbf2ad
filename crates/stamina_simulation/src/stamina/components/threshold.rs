//! Stamina thresholds: уровни, таблица порогов, per-level эффекты.
//!
//! Таблица одна на процесс (`THRESHOLD_TABLE`), никаких per-entity копий.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Уровень stamina (band). Порядок важен: сравнения монотонны.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect, Serialize, Deserialize,
)]
pub enum ThresholdLevel {
    Collapsed,
    Tired,
    Normal,
    Energetic,
    Overcharged,
}

/// Минимальное значение stamina для каждого уровня (inclusive lower bound).
///
/// Строго возрастает вместе с уровнем.
pub const THRESHOLD_TABLE: [(ThresholdLevel, f32); 5] = [
    (ThresholdLevel::Collapsed, 0.0),
    (ThresholdLevel::Tired, 250.0),
    (ThresholdLevel::Normal, 500.0),
    (ThresholdLevel::Energetic, 750.0),
    (ThresholdLevel::Overcharged, 1000.0),
];

/// Верхняя граница stamina (= минимум Overcharged).
pub const MAX_STAMINA: f32 = 1000.0;

/// Категория alert'ов, которую очищает dispatcher на Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AlertCategory {
    Stamina,
}

/// Ключ alert'а для presentation слоя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum StaminaAlert {
    Collapsed,
    Tired,
    Energetic,
    Overcharged,
}

impl ThresholdLevel {
    /// Все уровни по возрастанию.
    pub const ALL: [ThresholdLevel; 5] = [
        ThresholdLevel::Collapsed,
        ThresholdLevel::Tired,
        ThresholdLevel::Normal,
        ThresholdLevel::Energetic,
        ThresholdLevel::Overcharged,
    ];

    /// Минимум stamina для уровня (из `THRESHOLD_TABLE`).
    pub const fn min_stamina(self) -> f32 {
        THRESHOLD_TABLE[self as usize].1
    }

    /// Базовый regen для уровня: чем ниже stamina, тем быстрее возврат к Normal.
    pub const fn base_regen(self) -> f32 {
        match self {
            ThresholdLevel::Overcharged => 0.0,
            ThresholdLevel::Energetic => 2.5,
            ThresholdLevel::Normal => 5.0,
            ThresholdLevel::Tired => 10.0,
            ThresholdLevel::Collapsed => 25.0,
        }
    }

    /// Влияет ли уровень на скорость движения (Normal — нет).
    pub const fn affects_movement(self) -> bool {
        !matches!(self, ThresholdLevel::Normal)
    }

    /// Alert для уровня; `None` означает "очистить категорию".
    pub const fn alert(self) -> Option<StaminaAlert> {
        match self {
            ThresholdLevel::Collapsed => Some(StaminaAlert::Collapsed),
            ThresholdLevel::Tired => Some(StaminaAlert::Tired),
            ThresholdLevel::Normal => None,
            ThresholdLevel::Energetic => Some(StaminaAlert::Energetic),
            ThresholdLevel::Overcharged => Some(StaminaAlert::Overcharged),
        }
    }
}

/// ThresholdEngine: stamina value → самый высокий уровень, чей минимум ≤ value.
///
/// Total: отрицательные значения и NaN дают `Collapsed`.
pub fn compute_threshold(value: f32) -> ThresholdLevel {
    THRESHOLD_TABLE
        .iter()
        .rev()
        .find(|(_, min)| *min <= value)
        .map(|(level, _)| *level)
        .unwrap_or(ThresholdLevel::Collapsed)
}
