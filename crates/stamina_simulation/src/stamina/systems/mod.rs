//! Stamina systems (strategic layer logic)

pub mod bridge;
pub mod clock;
pub mod effects;
pub mod lifecycle;
pub mod regen;
pub mod slide;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod mocks;
#[cfg(test)]
mod regen_tests;
#[cfg(test)]
mod slide_tests;

// Re-export all systems
pub use bridge::*;
pub use clock::*;
pub use effects::*;
pub use lifecycle::*;
pub use regen::*;
pub use slide::*;
