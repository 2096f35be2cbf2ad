//! Gravity override компонент.
//!
//! Physics adapter переводит его в rapier `GravityScale`.

use bevy::prelude::*;

/// Игнорировать гравитацию (weightless) — например, на время slide.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct IgnoreGravity {
    pub weightless: bool,
    /// GravityScale, который вернётся когда weightless снимут
    pub gravity_scale: f32,
}

impl Default for IgnoreGravity {
    fn default() -> Self {
        Self {
            weightless: false,
            gravity_scale: 1.0,
        }
    }
}
