//=========================================================================
// Edge Trigger
//=========================================================================
//
// Detector of a false → true transition in a sampled boolean signal.
//
// The host's key polling reports "held now"; this primitive turns that
// into a one-shot "just pressed" event. The previous sample is updated
// unconditionally after every call, once per pass, so a failed action on
// a firing never corrupts the edge bookkeeping.
//
//=========================================================================

//=== EdgeTrigger =========================================================

/// One-shot transition detector over a sampled boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    /// Creates a trigger whose previous sample is "not held".
    pub fn new() -> Self {
        Self { previous: false }
    }

    /// Feeds the current sample and reports whether an edge fired.
    ///
    /// Fires exactly when `current == true` and the previous sample was
    /// `false`. The stored sample is replaced by `current` regardless of
    /// the outcome.
    pub fn sample(&mut self, current: bool) -> bool {
        let fired = current && !self.previous;
        self.previous = current;
        fired
    }

    /// The most recent sample fed to the trigger.
    pub fn last_state(&self) -> bool {
        self.previous
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
