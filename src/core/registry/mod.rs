//=========================================================================
// System Registry
//=========================================================================
//
// Named per-frame behavior modules and their dispatch bookkeeping.
//
// Architecture:
//   SystemRegistry
//     ├─ entries: HashMap<SystemId, RegistryEntry>
//     └─ order:   Vec<SystemId> sorted by (priority, insertion sequence)
//
// Flow:
//   register() → dispatch_order() → System::update() / System::render()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;

//=== Module Declarations =================================================

mod system_registry;

//=== Public API ==========================================================

pub use system_registry::SystemRegistry;

/// Unique registry key for a system.
pub type SystemId = String;

//=== System Trait ========================================================

/// A named, independently schedulable unit of per-frame behavior.
///
/// Systems are registered in [`SystemRegistry`] and invoked by the
/// dispatcher every pass in ascending priority order. All state a system
/// accumulates lives in its own fields and shares the descriptor's
/// lifecycle: created by `register`, destroyed only by `unregister` or
/// teardown.
///
/// # Minimal Implementation
///
/// Only `update()` is required. The render hook defaults to a no-op and
/// the clock policy defaults to the game clock:
///
/// ```rust
/// # use cadence_engine::prelude::*;
/// struct Heartbeat;
///
/// impl System for Heartbeat {
///     fn update(&mut self, _context: &mut FrameContext, tick: Tick) {
///         let _elapsed = tick.delta_seconds();
///     }
/// }
/// ```
pub trait System {
    /// Which clock this system treats as authoritative.
    ///
    /// Defaults to the game clock; systems that must keep responding
    /// while the simulation is paused declare [`ClockPolicy::System`].
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::Game
    }

    /// Called once per pass while the system is enabled.
    fn update(&mut self, context: &mut FrameContext, tick: Tick);

    /// Called after all updates when the pass requests a render phase,
    /// in the same priority order. Default implementation does nothing.
    fn render(&mut self, _context: &mut FrameContext) {}
}

//=== SystemDescriptor ====================================================

/// Registration record for one system: priority, eligibility, and the
/// boxed implementation.
///
/// Re-registering an existing id replaces its descriptor wholesale; there
/// is no partial merge.
pub struct SystemDescriptor {
    /// Dispatch priority; lower runs earlier. Ties break by insertion
    /// sequence.
    pub priority: i32,

    /// Whether the dispatcher invokes this system. Disabling keeps all
    /// accumulated state.
    pub enabled: bool,

    system: Box<dyn System>,
}

impl SystemDescriptor {
    /// Creates an enabled descriptor at the given priority.
    pub fn new(priority: i32, system: impl System + 'static) -> Self {
        Self {
            priority,
            enabled: true,
            system: Box::new(system),
        }
    }

    /// Overrides the initial enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The clock policy declared by the boxed implementation.
    pub fn clock_policy(&self) -> ClockPolicy {
        self.system.clock_policy()
    }

    /// Shared access to the boxed implementation.
    pub fn system(&self) -> &dyn System {
        self.system.as_ref()
    }

    /// Exclusive access to the boxed implementation.
    pub fn system_mut(&mut self) -> &mut dyn System {
        self.system.as_mut()
    }
}
