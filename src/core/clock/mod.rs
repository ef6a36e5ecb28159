//=========================================================================
// Dual Clock
//=========================================================================
//
// Two delta-time sources feed every dispatch pass:
//
//   game clock   — elapsed simulation time, frozen while the simulation
//                  is paused
//   system clock — elapsed wall time, never frozen
//
// A system declares which clock it consumes via ClockPolicy. The
// dispatcher selects the matching delta when building the Tick handed to
// the system, so a gameplay system cannot accidentally keep advancing on
// wall time while the simulation is paused.
//
//=========================================================================

//=== FrameDeltas =========================================================

/// The pair of delta times supplied by the host for one dispatch pass.
///
/// `game` is zero for every pass during which the simulation is paused.
/// `system` advances unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDeltas {
    /// Elapsed simulation time in seconds (frozen while paused).
    pub game: f32,

    /// Elapsed wall time in seconds (never frozen).
    pub system: f32,
}

impl FrameDeltas {
    /// Creates a delta pair from the two clock readings.
    pub fn new(game: f32, system: f32) -> Self {
        Self { game, system }
    }

    /// Deltas for a paused pass: the game clock is frozen at zero while
    /// the system clock keeps advancing.
    pub fn paused(system: f32) -> Self {
        Self { game: 0.0, system }
    }
}

//=== ClockPolicy =========================================================

/// Which clock a system treats as authoritative.
///
/// Declared once per system implementation. The dispatcher uses the
/// policy to select the delta exposed through [`Tick::delta_seconds`],
/// turning the clock assignment into a structural contract rather than a
/// documentation-only convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPolicy {
    /// Gameplay systems: freeze together with the simulation.
    Game,

    /// Infrastructure systems (input polling, debug camera shake): keep
    /// running while the simulation is paused.
    System,

    /// Bridge-forwarding systems that relay both clocks to the host.
    /// The only policy that can observe both deltas of a pass.
    Dual,
}

//=== Tick ================================================================

/// Per-system view of one dispatch pass.
///
/// Carries the monotonic frame number and the delta selected by the
/// system's declared [`ClockPolicy`]. Constructed by the dispatcher;
/// `Tick::new` is public so system implementations can be driven directly
/// in tests.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    frame: u64,
    deltas: FrameDeltas,
    policy: ClockPolicy,
}

impl Tick {
    /// Builds the tick view for a system with the given clock policy.
    pub fn new(frame: u64, deltas: FrameDeltas, policy: ClockPolicy) -> Self {
        Self {
            frame,
            deltas,
            policy,
        }
    }

    /// The frame counter for this pass. Monotonic, incremented once per
    /// pass by the dispatcher, never reset except at process start.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The clock policy this tick was built for.
    pub fn policy(&self) -> ClockPolicy {
        self.policy
    }

    /// The authoritative delta for this system, selected by its declared
    /// clock policy. `Dual` systems read the system clock here and use
    /// [`Tick::dual`] for the full pair.
    pub fn delta_seconds(&self) -> f32 {
        match self.policy {
            ClockPolicy::Game => self.deltas.game,
            ClockPolicy::System | ClockPolicy::Dual => self.deltas.system,
        }
    }

    /// Both clock deltas, available only to systems that declared
    /// [`ClockPolicy::Dual`]. Everyone else gets `None`.
    pub fn dual(&self) -> Option<FrameDeltas> {
        match self.policy {
            ClockPolicy::Dual => Some(self.deltas),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_policy_reads_game_clock() {
        let tick = Tick::new(3, FrameDeltas::new(0.016, 0.017), ClockPolicy::Game);
        assert_eq!(tick.delta_seconds(), 0.016);
        assert_eq!(tick.frame(), 3);
    }

    #[test]
    fn system_policy_reads_system_clock() {
        let tick = Tick::new(0, FrameDeltas::paused(0.016), ClockPolicy::System);
        assert_eq!(tick.delta_seconds(), 0.016);
    }

    #[test]
    fn game_policy_frozen_while_paused() {
        let tick = Tick::new(0, FrameDeltas::paused(0.016), ClockPolicy::Game);
        assert_eq!(tick.delta_seconds(), 0.0);
    }

    #[test]
    fn dual_deltas_hidden_from_single_clock_policies() {
        let deltas = FrameDeltas::new(0.016, 0.017);
        assert!(Tick::new(0, deltas, ClockPolicy::Game).dual().is_none());
        assert!(Tick::new(0, deltas, ClockPolicy::System).dual().is_none());

        let pair = Tick::new(0, deltas, ClockPolicy::Dual).dual();
        assert_eq!(pair, Some(deltas));
    }
}
