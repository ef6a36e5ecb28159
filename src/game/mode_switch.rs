//=========================================================================
// Mode Switch
//=========================================================================
//
// Edge-triggered transition of the host's external mode value.
//
// On a key's rising edge the system moves the host mode from exactly one
// expected source token to exactly one target token. A mismatched
// source, a missing mode, or a rejected write are reported and treated
// as "no transition this frame"; the edge bookkeeping is never
// disturbed by a failed attempt.
//
// Runs on the system clock so the key keeps working while the
// simulation is paused.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{transition_mode, KeyCode, ModeToken, TransitionOutcome};
use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::System;
use crate::core::trigger::EdgeTrigger;

//=== ModeSwitch ==========================================================

/// System that applies one named mode transition per key press.
pub struct ModeSwitch {
    key: KeyCode,
    edge: EdgeTrigger,
    from: ModeToken,
    to: ModeToken,
}

impl ModeSwitch {
    /// Binds a `from → to` transition to a key.
    pub fn new(key: KeyCode, from: ModeToken, to: ModeToken) -> Self {
        Self {
            key,
            edge: EdgeTrigger::new(),
            from,
            to,
        }
    }
}

impl System for ModeSwitch {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::System
    }

    fn update(&mut self, context: &mut FrameContext, _tick: Tick) {
        let held = context.bridge.poll_key(self.key);
        if !self.edge.sample(held) {
            return;
        }

        match transition_mode(context.bridge.as_mut(), &self.from, &self.to) {
            TransitionOutcome::Applied => {
                info!("Mode switched: {} -> {}", self.from, self.to);
            }
            TransitionOutcome::NoMatch { actual } => {
                debug!(
                    "Mode switch skipped: host mode is \"{}\", expected \"{}\"",
                    actual, self.from
                );
            }
            TransitionOutcome::Failed(err) => {
                warn!("Mode switch failed, no transition this frame: {}", err);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
