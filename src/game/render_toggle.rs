//=========================================================================
// Render Toggle
//=========================================================================
//
// Edge-triggered render on/off switch bound to a host key.
//
// Runs on the system clock so the toggle keeps responding while the
// simulation is paused. The toggle behavior itself is hot-reloadable:
// the wrapper owns the edge bookkeeping and the heartbeat accumulator,
// while ToggleLogic behind the reload guard owns nothing the dispatcher
// side depends on, so a swap never disturbs frame synchronization.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::convert::Infallible;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::bridge::KeyCode;
use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::System;
use crate::core::reload::{HotReloadGuard, ReloadStamp};
use crate::core::trigger::EdgeTrigger;

//=== Constants ===========================================================

/// Wall-time interval between heartbeat log lines, in seconds.
const HEARTBEAT_SECONDS: f32 = 0.2;

//=== ToggleLogic =========================================================

/// The hot-reloadable part: what a toggle firing does.
///
/// Rebuilt from scratch on every reload; its activation count is
/// deliberately instance-local and resets with a swap.
pub struct ToggleLogic {
    generation: u64,
    activations: u32,
}

impl ToggleLogic {
    /// Builds the logic for an implementation version.
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            activations: 0,
        }
    }

    /// The implementation version this instance was built from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Firings handled by this instance since it was constructed.
    pub fn activations(&self) -> u32 {
        self.activations
    }

    fn apply(&mut self, context: &mut FrameContext) {
        self.activations += 1;
        context.render_enabled = !context.render_enabled;
        info!(
            "Render toggle fired (gen {}): render_enabled = {}",
            self.generation, context.render_enabled
        );
    }
}

//=== RenderToggle ========================================================

/// System that flips the context's render flag on a key's rising edge.
pub struct RenderToggle {
    key: KeyCode,
    edge: EdgeTrigger,
    guard: HotReloadGuard<ToggleLogic>,
    heartbeat: f32,
}

impl RenderToggle {
    /// Binds the toggle to a key, with its logic observed through the
    /// given reload stamp.
    pub fn new(key: KeyCode, stamp: ReloadStamp) -> Self {
        let initial = ToggleLogic::new(stamp.current());
        Self {
            key,
            edge: EdgeTrigger::new(),
            guard: HotReloadGuard::new(stamp, initial),
            heartbeat: 0.0,
        }
    }

    /// The implementation version currently serving.
    pub fn logic_version(&self) -> u64 {
        self.guard.version()
    }

    /// The most recent key sample, kept by the wrapper across reloads.
    pub fn last_key_state(&self) -> bool {
        self.edge.last_state()
    }
}

impl System for RenderToggle {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::System
    }

    fn update(&mut self, context: &mut FrameContext, tick: Tick) {
        // Swap check happens before any delegation, mid-pass.
        let logic = self
            .guard
            .refresh(|version| Ok::<_, Infallible>(ToggleLogic::new(version)));

        self.heartbeat += tick.delta_seconds();
        if self.heartbeat >= HEARTBEAT_SECONDS {
            debug!(
                "Render toggle alive (gen {}, frame {})",
                logic.generation(),
                tick.frame()
            );
            self.heartbeat = 0.0;
        }

        let held = context.bridge.poll_key(self.key);
        if self.edge.sample(held) {
            logic.apply(context);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
