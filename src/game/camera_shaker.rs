//=========================================================================
// Camera Shaker
//=========================================================================
//
// Periodically nudges the host camera by a small random offset.
//
// System-clock system: the debug shake keeps running while the
// simulation is paused, which is exactly why it must never consume the
// game delta.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::clock::{ClockPolicy, Tick};
use crate::core::context::FrameContext;
use crate::core::registry::System;
use crate::core::trigger::PeriodicTrigger;

//=== CameraShaker ========================================================

/// Applies one camera nudge per interval, scaled by `magnitude`.
pub struct CameraShaker {
    trigger: PeriodicTrigger,
    magnitude: f32,
    rng: StdRng,
}

impl CameraShaker {
    /// Creates a shaker firing every `interval_frames` frames.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is not positive.
    pub fn new(interval_frames: u64, magnitude: f32) -> Self {
        assert!(magnitude > 0.0, "Shake magnitude must be positive");
        Self {
            trigger: PeriodicTrigger::new(interval_frames),
            magnitude,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    #[cfg(test)]
    pub fn seeded(interval_frames: u64, magnitude: f32, seed: u64) -> Self {
        let mut shaker = Self::new(interval_frames, magnitude);
        shaker.rng = StdRng::seed_from_u64(seed);
        shaker
    }
}

impl System for CameraShaker {
    fn clock_policy(&self) -> ClockPolicy {
        ClockPolicy::System
    }

    fn update(&mut self, context: &mut FrameContext, tick: Tick) {
        if !self.trigger.poll(tick.frame()) {
            return;
        }

        let dx = self.rng.random_range(-0.5..0.5) * self.magnitude;
        let dy = self.rng.random_range(-0.5..0.5) * self.magnitude;
        let dz = self.rng.random_range(-0.25..0.25) * self.magnitude;

        context.bridge.move_camera(dx, dy, dz);
        debug!("Camera shake ({:.3}, {:.3}, {:.3})", dx, dy, dz);
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
        Tick::new(frame, FrameDeltas::paused(0.016), ClockPolicy::System)
    }

    #[test]
    fn shakes_once_per_interval() {
        let mut shaker = CameraShaker::seeded(5, 0.2, 3);
        let bridge = RecordingBridge::new();
        let mut ctx = FrameContext::new(Box::new(bridge.clone()), true);

        for frame in 0..11 {
            shaker.update(&mut ctx, tick(frame));
        }

        let shakes = bridge.count_calls(|c| matches!(c, BridgeCall::Camera { .. }));
        assert_eq!(shakes, 3); // frames 0, 5, 10
    }

    #[test]
    fn offsets_scale_with_magnitude() {
        let mut shaker = CameraShaker::seeded(1, 0.2, 3);
        let bridge = RecordingBridge::new();
        let mut ctx = FrameContext::new(Box::new(bridge.clone()), true);

        for frame in 0..16 {
            shaker.update(&mut ctx, tick(frame));
        }

        for call in bridge.calls() {
            if let BridgeCall::Camera { dx, dy, dz } = call {
                assert!(dx.abs() <= 0.1);
                assert!(dy.abs() <= 0.1);
                assert!(dz.abs() <= 0.05);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Shake magnitude must be positive")]
    fn zero_magnitude_rejected() {
        CameraShaker::new(5, 0.0);
    }
}
