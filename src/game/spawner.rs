//=========================================================================
// Object Spawner
//=========================================================================
//
// Periodically spawns a host object at a random position.
//
// Game-clock system: spawning freezes together with the simulation.
// The interval trigger is wrapper-owned bookkeeping keyed on the frame
// counter, so pausing never skews the spawn cadence relative to other
// frame-keyed systems.
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

//=== ObjectSpawner =======================================================

/// Spawns one object per interval at a random position in a fixed box.
pub struct ObjectSpawner {
    trigger: PeriodicTrigger,
    rng: StdRng,
}

impl ObjectSpawner {
    /// Creates a spawner firing every `interval_frames` frames.
    pub fn new(interval_frames: u64) -> Self {
        Self {
            trigger: PeriodicTrigger::new(interval_frames),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    #[cfg(test)]
    pub fn seeded(interval_frames: u64, seed: u64) -> Self {
        Self {
            trigger: PeriodicTrigger::new(interval_frames),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The frame of the last spawn, or `None` before the first.
    pub fn last_spawn_frame(&self) -> Option<u64> {
        self.trigger.last_fire()
    }
}

impl System for ObjectSpawner {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::Game
    }

    fn update(&mut self, context: &mut FrameContext, tick: Tick) {
        if !self.trigger.poll(tick.frame()) {
            return;
        }

        let x = self.rng.random_range(-5.0..5.0);
        let y = self.rng.random_range(-5.0..5.0);
        let z = self.rng.random_range(0.0..3.0);

        match context.bridge.spawn_object(x, y, z) {
            Ok(()) => debug!("Spawned object at ({:.2}, {:.2}, {:.2})", x, y, z),
            Err(err) => warn!("Spawn skipped this frame: {}", err),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::testing::{BridgeCall, RecordingBridge};
    use crate::core::clock::FrameDeltas;

    fn tick(frame: u64) -> Tick {
        Tick::new(frame, FrameDeltas::new(0.016, 0.016), ClockPolicy::Game)
    }

    fn setup(interval: u64) -> (ObjectSpawner, FrameContext, RecordingBridge) {
        let spawner = ObjectSpawner::seeded(interval, 7);
        let bridge = RecordingBridge::new();
        let context = FrameContext::new(Box::new(bridge.clone()), true);
        (spawner, context, bridge)
    }

    #[test]
    fn spawns_once_per_interval() {
        let (mut spawner, mut ctx, bridge) = setup(4);

        for frame in 0..9 {
            spawner.update(&mut ctx, tick(frame));
        }

        let spawns = bridge.count_calls(|c| matches!(c, BridgeCall::Spawn { .. }));
        assert_eq!(spawns, 3); // frames 0, 4, 8
        assert_eq!(spawner.last_spawn_frame(), Some(8));
    }

    #[test]
    fn spawn_positions_stay_inside_the_box() {
        let (mut spawner, mut ctx, bridge) = setup(1);

        for frame in 0..32 {
            spawner.update(&mut ctx, tick(frame));
        }

        for call in bridge.calls() {
            if let BridgeCall::Spawn { x, y, z } = call {
                assert!((-5.0..5.0).contains(&x));
                assert!((-5.0..5.0).contains(&y));
                assert!((0.0..3.0).contains(&z));
            }
        }
    }
}
