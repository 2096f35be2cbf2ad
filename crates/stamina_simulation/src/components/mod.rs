//! ECS Components, которые stamina трогает у других систем
//!
//! Организация по доменам:
//! - posture: поза актора (StandingState — сбит с ног / стоит)
//! - gravity: override гравитации (IgnoreGravity)
//! - flight: marker летающих entities (Flying)
//!
//! Сама StaminaState живёт в `stamina::components`.

pub mod flight;
pub mod gravity;
pub mod posture;

// Re-exports для удобного импорта
pub use flight::*;
pub use gravity::*;
pub use posture::*;
