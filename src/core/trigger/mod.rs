//=========================================================================
// Trigger Primitives
//=========================================================================
//
// The two small state machines every registered system is built from:
//
//   PeriodicTrigger — frame-count cooldown, fires at most once per
//                     configured interval
//   EdgeTrigger     — converts a sampled "held now" boolean into a
//                     one-shot "just transitioned to held" event
//
// Trigger state lives inside the system that owns it and shares that
// system's lifecycle.
//
//=========================================================================

//=== Module Declarations =================================================

mod edge;
mod periodic;

//=== Public API ==========================================================

pub use edge::EdgeTrigger;
pub use periodic::PeriodicTrigger;
