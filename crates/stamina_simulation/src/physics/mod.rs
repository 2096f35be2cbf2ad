//! Physics adapter (rapier components)
//!
//! Stamina core не интегрирует физику: он только просит scale velocity,
//! damping, режим тела и weightless. Здесь — то, что связывает эти запросы
//! с rapier и spawn helper для тел, которые умеют slide.

pub mod slide_body;

// Re-export основных типов
pub use slide_body::{spawn_stamina_actor, sync_ignore_gravity};
