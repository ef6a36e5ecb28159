//=========================================================================
// Periodic Trigger
//=========================================================================
//
// Frame-count cooldown primitive.
//
// Fires when the owning system's frame counter has advanced at least
// `interval_frames` past the last firing. The last-fire frame is set to
// the current frame on every firing, not advanced by the interval, so
// drift never accumulates and a frame jump past several boundaries fires
// exactly once (no catch-up bursts).
//
//=========================================================================

//=== PeriodicTrigger =====================================================

/// Fires an action at most once per configured frame interval.
///
/// The first poll always fires; afterwards the trigger stays quiet until
/// `interval_frames` frames have elapsed since the last firing. With an
/// interval of 4 and one poll per frame, firings land on frames
/// 0, 4, 8, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTrigger {
    interval_frames: u64,
    last_fire: Option<u64>,
}

impl PeriodicTrigger {
    //--- Construction -----------------------------------------------------

    /// Creates a trigger that fires every `interval_frames` frames.
    ///
    /// # Panics
    ///
    /// Panics if `interval_frames == 0`.
    pub fn new(interval_frames: u64) -> Self {
        assert!(interval_frames > 0, "Trigger interval must be positive");
        Self {
            interval_frames,
            last_fire: None,
        }
    }

    //--- Evaluation -------------------------------------------------------

    /// Pure firing decision: `(fired, new_last_fire)` for a given frame.
    ///
    /// `None` for `last_fire` means the trigger has never fired; the
    /// first evaluation then fires unconditionally. On a firing the new
    /// last-fire frame is `current_frame` itself, which is what prevents
    /// catch-up bursts after a frame jump.
    pub fn evaluate(
        current_frame: u64,
        last_fire: Option<u64>,
        interval_frames: u64,
    ) -> (bool, Option<u64>) {
        match last_fire {
            None => (true, Some(current_frame)),
            Some(last) if current_frame.saturating_sub(last) >= interval_frames => {
                (true, Some(current_frame))
            }
            Some(last) => (false, Some(last)),
        }
    }

    /// Polls the trigger for the given frame, updating its state.
    ///
    /// Returns `true` when the owning system should fire its action this
    /// frame. Call once per dispatch pass with the pass's frame counter.
    pub fn poll(&mut self, current_frame: u64) -> bool {
        let (fired, last_fire) =
            Self::evaluate(current_frame, self.last_fire, self.interval_frames);
        self.last_fire = last_fire;
        fired
    }

    //--- Queries ----------------------------------------------------------

    /// The configured interval in frames.
    pub fn interval_frames(&self) -> u64 {
        self.interval_frames
    }

    /// The frame of the last firing, or `None` before the first firing.
    pub fn last_fire(&self) -> Option<u64> {
        self.last_fire
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_exact_interval_boundaries() {
        let mut trigger = PeriodicTrigger::new(4);

        let fired: Vec<u64> = (0..=12).filter(|&frame| trigger.poll(frame)).collect();
        assert_eq!(fired, vec![0, 4, 8, 12]);
    }

    #[test]
    fn first_poll_always_fires() {
        let mut trigger = PeriodicTrigger::new(240);
        assert!(trigger.poll(0));
        assert_eq!(trigger.last_fire(), Some(0));
    }

    #[test]
    fn quiet_between_boundaries() {
        let mut trigger = PeriodicTrigger::new(4);
        assert!(trigger.poll(0));
        assert!(!trigger.poll(1));
        assert!(!trigger.poll(2));
        assert!(!trigger.poll(3));
        assert!(trigger.poll(4));
    }

    #[test]
    fn frame_jump_fires_exactly_once() {
        let mut trigger = PeriodicTrigger::new(4);
        assert!(trigger.poll(0));

        // Jump past three boundaries at once: one firing, no burst.
        assert!(trigger.poll(13));
        assert_eq!(trigger.last_fire(), Some(13));

        // Next boundary is measured from the actual firing frame.
        assert!(!trigger.poll(14));
        assert!(!trigger.poll(16));
        assert!(trigger.poll(17));
    }

    #[test]
    fn last_fire_tracks_current_frame_not_interval_multiples() {
        // Firing at frame 5 with interval 4 must anchor the next window
        // at 5, not at 4, so drift never accumulates.
        let (fired, last) = PeriodicTrigger::evaluate(5, Some(0), 4);
        assert!(fired);
        assert_eq!(last, Some(5));

        let (fired, last) = PeriodicTrigger::evaluate(8, last, 4);
        assert!(!fired);
        assert_eq!(last, Some(5));

        let (fired, _) = PeriodicTrigger::evaluate(9, last, 4);
        assert!(fired);
    }

    #[test]
    fn evaluate_is_pure() {
        let (fired_a, last_a) = PeriodicTrigger::evaluate(7, Some(2), 4);
        let (fired_b, last_b) = PeriodicTrigger::evaluate(7, Some(2), 4);
        assert_eq!(fired_a, fired_b);
        assert_eq!(last_a, last_b);
    }

    #[test]
    #[should_panic(expected = "Trigger interval must be positive")]
    fn zero_interval_rejected() {
        PeriodicTrigger::new(0);
    }
}
