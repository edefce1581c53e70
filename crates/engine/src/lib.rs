//! Rule-driven powered-equipment engine.
//!
//! Equipment definitions are compiled from configuration, collected in a
//! [`Registry`], and driven entirely by host events: posture toggles,
//! damage, repair attempts, disconnects and the tick loop. The engine
//! never touches the world directly; everything goes through the
//! [`exogear_core::Host`] trait.

#![warn(missing_docs)]

pub mod actions;
pub mod burst;
pub mod definition;
pub mod durability;
mod engine;
mod error;
pub mod fuel;
mod registry;

pub use actions::DamageCause;
pub use definition::{ActionKind, EquipmentDefinition, RawDefinition, SlotPolicy};
pub use engine::Engine;
pub use error::ConfigError;
pub use registry::Registry;
