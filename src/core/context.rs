//=========================================================================
// Frame Context
//=========================================================================
//
// Shared data container passed to every system during a pass.
//
// Contains state that systems read/write:
// - render_enabled: explicit render toggle (no ambient global flag)
// - bridge:         the host engine's call interface
// - commands:       deferred registry mutations, applied at pass end
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::bridge::HostBridge;
use crate::core::registry::{SystemDescriptor, SystemId};

//=== RegistryCommand =====================================================

/// Registry mutation requested from inside a pass.
///
/// Systems cannot touch the registry directly while the dispatcher is
/// iterating it; they queue commands here instead. Commands apply at the
/// pass boundary, so a pass in progress always completes on the order
/// snapshot taken at its start.
pub enum RegistryCommand {
    /// Insert or wholesale-replace a system.
    Register {
        id: SystemId,
        descriptor: SystemDescriptor,
    },

    /// Remove a system; a no-op when the id is absent.
    Unregister(SystemId),

    /// Toggle dispatch eligibility without touching state.
    SetEnabled(SystemId, bool),
}

//=== CommandQueue ========================================================

/// Queue of deferred registry mutations for the current pass.
///
/// Pushed to by systems during updates, drained by the dispatcher at the
/// pass boundary.
#[derive(Default)]
pub struct CommandQueue {
    queue: Vec<RegistryCommand>,
}

impl CommandQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a registry mutation for the next pass boundary.
    pub fn push(&mut self, command: RegistryCommand) {
        self.queue.push(command);
    }

    /// Returns true if no mutations are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued mutations.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued mutations, leaving the queue empty.
    pub fn take(&mut self) -> Vec<RegistryCommand> {
        std::mem::take(&mut self.queue)
    }
}

//=== FrameContext ========================================================

/// Process-wide context handed to every system each pass.
///
/// Owns the host bridge and the cross-system flags. Field access is
/// direct: the context exists precisely so that state like the render
/// toggle has one explicit home instead of an ambient global lookup.
pub struct FrameContext {
    /// Frame counter of the pass in progress. Written by the dispatcher
    /// at pass start; systems treat it as read-only.
    pub frame: u64,

    /// Whether the render phase should reach the host this frame.
    pub render_enabled: bool,

    /// The host engine's simulation/render/world primitives.
    pub bridge: Box<dyn HostBridge>,

    /// Deferred registry mutations issued during the pass.
    pub commands: CommandQueue,
}

impl FrameContext {
    /// Creates a context around the host bridge.
    pub fn new(bridge: Box<dyn HostBridge>, render_enabled: bool) -> Self {
        Self {
            frame: 0,
            render_enabled,
            bridge,
            commands: CommandQueue::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
