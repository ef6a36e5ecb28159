//=========================================================================
// Host Bridge
//=========================================================================
//
// Narrow call interface to the host engine (simulation step, render
// step, world-mutation primitives, input polling). The host owns all of
// this; the dispatch core only calls through it.
//
// Access discipline: the bridge is a single shared resource touched by
// multiple systems with no transaction layer. Calls are fire-and-forget,
// ordered only by dispatch priority. Expected misses ("no such mode",
// "object unavailable") come back as typed results, never as panics and
// never as control-flow exceptions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use thiserror::Error;

//=== KeyCode =============================================================

/// Keys the dispatch core can poll through the host.
///
/// Only the keys the built-in systems bind are enumerated; the host maps
/// them onto its own scan codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    F1,
    F2,
    F3,
    F4,
    Space,
    Enter,
    Escape,
}

//=== ModeToken ===========================================================

/// Named external mode value owned by the host (e.g. "attract",
/// "playing").
///
/// The core never interprets tokens beyond equality; transitions compare
/// against exactly one expected source and write exactly one target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModeToken(String);

impl ModeToken {
    /// Wraps a host mode name.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModeToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for ModeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//=== BridgeError =========================================================

/// Failure reading or writing host state through the bridge.
///
/// Every variant is recoverable: callers log it and treat the frame as
/// "no effect", they never abort the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The host exposes no mode value at all.
    #[error("host mode is not exposed")]
    ModeUnavailable,

    /// The host refused the requested mode token.
    #[error("host rejected mode \"{token}\"")]
    ModeRejected { token: ModeToken },

    /// The indexed object does not exist on the host side.
    #[error("object {index} is not available")]
    ObjectUnavailable { index: usize },

    /// The host refused to spawn a new object.
    #[error("spawn rejected by host: {reason}")]
    SpawnRejected { reason: String },
}

//=== HostBridge ==========================================================

/// The host engine's update/render step and world-mutation primitives.
///
/// Implemented by the embedding application; the dispatch core owns a
/// boxed instance inside its frame context. All methods take `&mut self`
/// because the core runs on a single thread and the bridge is mutated
/// freely between calls.
pub trait HostBridge {
    /// Advances the host simulation by both clock deltas.
    fn advance_simulation(&mut self, game_delta: f32, system_delta: f32);

    /// Renders one host frame.
    fn render_frame(&mut self);

    /// Spawns an object at the given world position.
    fn spawn_object(&mut self, x: f32, y: f32, z: f32) -> Result<(), BridgeError>;

    /// Moves the indexed object to the given world position.
    fn move_object(&mut self, index: usize, x: f32, y: f32, z: f32) -> Result<(), BridgeError>;

    /// Offsets the camera by the given delta.
    fn move_camera(&mut self, dx: f32, dy: f32, dz: f32);

    /// Reads the host's current external mode.
    fn read_mode(&self) -> Result<ModeToken, BridgeError>;

    /// Writes a new external mode to the host.
    fn write_mode(&mut self, mode: ModeToken) -> Result<(), BridgeError>;

    /// Whether the given key is held right now. Edge detection is layered
    /// on top by [`EdgeTrigger`](crate::core::trigger::EdgeTrigger).
    fn poll_key(&self, key: KeyCode) -> bool;
}

//=== Mode Transition =====================================================

/// Result of one attempted mode transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The mode matched the expected source and the target was written.
    Applied,

    /// The current mode did not match the expected source; nothing was
    /// written. Carries the mode actually observed.
    NoMatch { actual: ModeToken },

    /// Reading or writing the host mode failed; nothing was written.
    Failed(BridgeError),
}

/// Moves the host mode from exactly one expected source to exactly one
/// target.
///
/// Reads the external mode, compares it against `from`, and writes `to`
/// only on a match. Every failure path is folded into the returned
/// outcome so callers branch on it instead of unwinding.
pub fn transition_mode(
    bridge: &mut dyn HostBridge,
    from: &ModeToken,
    to: &ModeToken,
) -> TransitionOutcome {
    let actual = match bridge.read_mode() {
        Ok(mode) => mode,
        Err(err) => return TransitionOutcome::Failed(err),
    };

    if actual != *from {
        return TransitionOutcome::NoMatch { actual };
    }

    match bridge.write_mode(to.clone()) {
        Ok(()) => TransitionOutcome::Applied,
        Err(err) => TransitionOutcome::Failed(err),
    }
}

//=========================================================================
// Test Double
//=========================================================================


//=========================================================================
// Unit Tests
//=========================================================================
