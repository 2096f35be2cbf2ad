//! Flight marker (jetpack в полёте). Летящий актор не может делать slide.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Flying;
