//=========================================================================
// Dispatch Core
//
// The machinery beneath the runtime facade.
//
// Responsibilities:
// - Define the system extension surface (registry, descriptors, trait)
// - Run one deterministic dispatch pass per host frame (dispatch)
// - Carry the dual game/system clocks into each system (clock)
// - Detect frame-keyed and edge conditions (trigger)
// - Talk to the host engine through a narrow interface (bridge)
// - Swap live system internals across reloads (reload)
//
// Notes:
// Everything here runs on the host's frame loop thread. There is no
// internal scheduling, no background thread, and no locking; a pass is a
// plain sequence of method calls in priority order.
//
//=========================================================================

pub mod bridge;
pub mod clock;
pub mod context;
pub mod dispatch;
pub mod registry;
pub mod reload;
pub mod trigger;
