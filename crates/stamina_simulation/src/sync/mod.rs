//! Stamina replication: authority ↔ observer.
//!
//! Один core, два runtime адаптера:
//! - `AuthoritySyncPlugin` — симулирует, принимает intents, шлёт snapshots
//! - `ObserverSyncPlugin` — только применяет snapshots и шлёт intents

use bevy::prelude::*;

pub mod authority;
pub mod observer;
pub mod protocol;


pub use authority::*;
pub use observer::*;
pub use protocol::*;

use crate::stamina::{StaminaPlugin, StaminaSet};

/// Authority runtime: StaminaPlugin + intents + snapshots.
pub struct AuthoritySyncPlugin;

impl Plugin for AuthoritySyncPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StaminaPlugin>() {
            app.add_plugins(StaminaPlugin);
        }

        app.add_event::<InboundSyncMessage>()
            .add_event::<OutboundSyncMessage>()
            .add_event::<SlideRequested>();

        app.add_systems(
            FixedUpdate,
            (
                (receive_slide_intents, handle_slide_requests)
                    .chain()
                    .in_set(StaminaSet::Intents),
                publish_snapshots.in_set(StaminaSet::Replicate),
            ),
        );
    }
}

/// Observer runtime: mirror без симуляции.
pub struct ObserverSyncPlugin;

impl Plugin for ObserverSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InboundSyncMessage>()
            .add_event::<OutboundSyncMessage>()
            .add_event::<SlideInput>();

        app.add_systems(Update, (apply_inbound_snapshots, send_slide_intents));
    }
}
