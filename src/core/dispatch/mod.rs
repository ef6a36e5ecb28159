//=========================================================================
// Dispatcher
//=========================================================================
//
// Per-frame invocation of every enabled system in deterministic order.
//
// Each pass:
//   1. Snapshot the dispatch order
//   2. Invoke update() on every enabled system, ascending (priority,
//      insertion); render() afterward in the same order when requested
//   3. Apply registry mutations queued during the pass
//   4. Advance the frame counter
//
// Single-threaded and cooperative: no system runs concurrently with
// another, nothing here blocks, and a stalled system stalls the frame.
// Error isolation happens inside each system (bridge results are caught
// at the call site), not by preemption.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::clock::{FrameDeltas, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::{SystemId, SystemRegistry};

//=== RenderPhase =========================================================

/// Whether a pass runs the render phase after updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Update only.
    Skip,

    /// Update, then render in the same order.
    Run,
}

//=== Dispatcher ==========================================================

/// Invokes registered systems once per frame in priority order.
///
/// Owns the registry and the monotonic frame counter. The counter is
/// incremented exactly once per pass and never reset except at process
/// start; systems read it through [`Tick::frame`] and the context.
pub struct Dispatcher {
    registry: SystemRegistry,
    frame: u64,
}

impl Dispatcher {
    //--- Construction -----------------------------------------------------

    /// Creates a dispatcher with an empty registry at frame zero.
    pub fn new() -> Self {
        Self {
            registry: SystemRegistry::new(),
            frame: 0,
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Shared access to the registry.
    pub fn registry(&self) -> &SystemRegistry {
        &self.registry
    }

    /// Exclusive access to the registry, for setup and between-pass
    /// mutation.
    pub fn registry_mut(&mut self) -> &mut SystemRegistry {
        &mut self.registry
    }

    /// The frame counter of the next pass.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    //--- Pass Execution ---------------------------------------------------

    /// Runs one dispatch pass with the host-supplied clock deltas.
    ///
    /// Priority order is respected on every pass: a system never observes
    /// same-pass side effects of a later-priority system. Mutations
    /// queued in the context's command queue apply at the pass boundary
    /// and take effect starting with the next pass.
    pub fn run_pass(
        &mut self,
        context: &mut FrameContext,
        deltas: FrameDeltas,
        render: RenderPhase,
    ) {
        context.frame = self.frame;

        // Order snapshot for this pass; later mutations wait at the
        // boundary, so the snapshot stays authoritative throughout.
        let order: Vec<SystemId> = self.registry.dispatch_order().to_vec();

        for id in &order {
            let Some(descriptor) = self.registry.get_mut(id) else {
                continue;
            };
            if !descriptor.enabled {
                continue;
            }

            let tick = Tick::new(self.frame, deltas, descriptor.clock_policy());
            descriptor.system_mut().update(context, tick);
        }

        if render == RenderPhase::Run {
            for id in &order {
                let Some(descriptor) = self.registry.get_mut(id) else {
                    continue;
                };
                if !descriptor.enabled {
                    continue;
                }
                descriptor.system_mut().render(context);
            }
        }

        for command in context.commands.take() {
            self.registry.apply(command);
        }

        self.frame += 1;
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
