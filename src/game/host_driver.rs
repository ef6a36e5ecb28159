//=========================================================================
// Host Driver
//=========================================================================
//
// Highest-priority system: relays the pass into the host engine.
//
// Runs first so every later system observes a host world already
// advanced for this frame. The only system with a Dual clock policy,
// because the host's own step wants both deltas.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::System;

//=== HostDriver ==========================================================

/// Forwards both clock deltas to the host simulation step and drives the
/// host render step while rendering is enabled.
pub struct HostDriver;

impl System for HostDriver {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::Dual
    }

    fn update(&mut self, context: &mut FrameContext, tick: Tick) {
        if let Some(deltas) = tick.dual() {
            context
                .bridge
                .advance_simulation(deltas.game, deltas.system);
        }
    }

    fn render(&mut self, context: &mut FrameContext) {
        if context.render_enabled {
            context.bridge.render_frame();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
