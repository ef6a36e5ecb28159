//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cadence_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime facade
pub use crate::runtime::{Runtime, RuntimeBuilder};

// Clocks and ticks
pub use crate::core::clock::{ClockPolicy, FrameDeltas, Tick};

// Registry and dispatch
pub use crate::core::context::{FrameContext, RegistryCommand};
pub use crate::core::dispatch::{Dispatcher, RenderPhase};
pub use crate::core::registry::{System, SystemDescriptor, SystemId, SystemRegistry};

// Host bridge
pub use crate::core::bridge::{BridgeError, HostBridge, KeyCode, ModeToken};

// Triggers
pub use crate::core::trigger::{EdgeTrigger, PeriodicTrigger};

// Hot reload
pub use crate::core::reload::{HotReloadGuard, ReloadStamp, VersionedHandle};
