//! SyncProtocol: что пересекает authority boundary.
//!
//! - Authority → observer: `StaminaSnapshot` (on change)
//! - Observer → authority: `SlideIntentMessage`
//!
//! Транспорт не наша забота: payload — bincode байты в событиях
//! `OutboundSyncMessage` / `InboundSyncMessage`, entity уже резолвнут
//! транспортным слоем.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Авторитетное подмножество StaminaState.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaminaSnapshot {
    pub current_stamina: f32,
    pub can_slide: bool,
    pub slide_cost: u8,
    pub actual_regen: f32,
    pub stimulated: bool,
}

/// Куда/как контроллер хочет slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct TargetCoordinates {
    pub x: f32,
    pub y: f32,
    /// Opaque id системы координат (grid / map)
    pub frame_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideIntentMessage {
    pub target_coordinates: TargetCoordinates,
}

/// Всё, что ходит по сети для stamina.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SyncMessage {
    Snapshot(StaminaSnapshot),
    SlideIntent(SlideIntentMessage),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to encode stamina message: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode stamina message: {0}")]
    Decode(#[source] bincode::Error),
}

impl SyncMessage {
    pub fn encode(&self) -> Result<Vec<u8>, SyncError> {
        bincode::serialize(self).map_err(SyncError::Encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SyncError> {
        bincode::deserialize(bytes).map_err(SyncError::Decode)
    }
}

/// Event: сообщение к отправке (транспорт забирает payload).
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct OutboundSyncMessage {
    pub entity: Entity,
    pub payload: Vec<u8>,
}

/// Event: сообщение от транспорта.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct InboundSyncMessage {
    pub entity: Entity,
    pub payload: Vec<u8>,
}
