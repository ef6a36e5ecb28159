//=========================================================================
// Object Mover
//=========================================================================
//
// Periodically teleports one host object to a random position.
//
// Game-clock system. A missing object on the host side is an expected
// bridge miss: logged, treated as "no move this frame", never a fault.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::System;
use crate::core::trigger::PeriodicTrigger;

//=== ObjectMover =========================================================

/// Moves the object at a fixed host index once per interval.
pub struct ObjectMover {
    index: usize,
    trigger: PeriodicTrigger,
    rng: StdRng,
}

impl ObjectMover {
    /// Creates a mover for the given host object index.
    pub fn new(index: usize, interval_frames: u64) -> Self {
        Self {
            index,
            trigger: PeriodicTrigger::new(interval_frames),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    #[cfg(test)]
    pub fn seeded(index: usize, interval_frames: u64, seed: u64) -> Self {
        Self {
            index,
            trigger: PeriodicTrigger::new(interval_frames),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The frame of the last move, or `None` before the first.
    pub fn last_move_frame(&self) -> Option<u64> {
        self.trigger.last_fire()
    }
}

impl System for ObjectMover {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::Game
    }

    fn update(&mut self, context: &mut FrameContext, tick: Tick) {
        if !self.trigger.poll(tick.frame()) {
            return;
        }

        let x = self.rng.random_range(-4.0..4.0);
        let y = self.rng.random_range(-4.0..4.0);
        let z = self.rng.random_range(0.0..2.0);

        match context.bridge.move_object(self.index, x, y, z) {
            Ok(()) => debug!(
                "Moved object {} to ({:.2}, {:.2}, {:.2})",
                self.index, x, y, z
            ),
            Err(err) => warn!("Move skipped this frame: {}", err),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
