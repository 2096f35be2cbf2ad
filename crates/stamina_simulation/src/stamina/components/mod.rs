//! Stamina components

pub mod state;
pub mod threshold;


// Re-export all components
pub use state::*;
pub use threshold::*;
