//=========================================================================
// Runtime
//=========================================================================
//
// Top-level facade tying the dispatcher, the frame context, and the host
// bridge together.
//
// The host owns the frame loop; once per frame it measures its two clock
// deltas and calls `tick` (or `tick_and_render`). The runtime never
// sleeps, spawns threads, or schedules anything itself.
//
// Usage:
//   let mut runtime = RuntimeBuilder::new(bridge).build();
//   runtime.init(|registry| { ... register systems ... });
//   loop { runtime.tick_and_render(deltas); }
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::bridge::HostBridge;
use crate::core::clock::FrameDeltas;
use crate::core::context::FrameContext;
use crate::core::dispatch::{Dispatcher, RenderPhase};
use crate::core::registry::SystemRegistry;

//=== RuntimeBuilder ======================================================

/// Configures and constructs a [`Runtime`].
pub struct RuntimeBuilder {
    bridge: Box<dyn HostBridge>,
    render_enabled: bool,
}

impl RuntimeBuilder {
    /// Starts a builder around the host's bridge implementation.
    pub fn new(bridge: impl HostBridge + 'static) -> Self {
        Self {
            bridge: Box::new(bridge),
            render_enabled: true,
        }
    }

    /// Sets the initial render flag. Defaults to `true`.
    pub fn with_render_enabled(mut self, enabled: bool) -> Self {
        self.render_enabled = enabled;
        self
    }

    /// Builds the runtime at frame zero.
    pub fn build(self) -> Runtime {
        Runtime {
            dispatcher: Dispatcher::new(),
            context: FrameContext::new(self.bridge, self.render_enabled),
        }
    }
}

//=== Runtime =============================================================

/// Owns the dispatcher and the frame context for one embedding.
pub struct Runtime {
    dispatcher: Dispatcher,
    context: FrameContext,
}

impl Runtime {
    //--- Setup ------------------------------------------------------------

    /// One-time setup hook; runs `setup` against the registry before the
    /// first pass.
    pub fn init(&mut self, setup: impl FnOnce(&mut SystemRegistry)) {
        setup(self.dispatcher.registry_mut());
        info!(
            "Runtime initialized with {} system(s)",
            self.dispatcher.registry().len()
        );
    }

    //--- Accessors --------------------------------------------------------

    /// Shared access to the registry.
    pub fn registry(&self) -> &SystemRegistry {
        self.dispatcher.registry()
    }

    /// Exclusive access to the registry, for between-frame mutation.
    pub fn registry_mut(&mut self) -> &mut SystemRegistry {
        self.dispatcher.registry_mut()
    }

    /// The frame context handed to systems each pass.
    pub fn context(&self) -> &FrameContext {
        &self.context
    }

    /// Exclusive access to the frame context.
    pub fn context_mut(&mut self) -> &mut FrameContext {
        &mut self.context
    }

    /// The frame counter of the next pass.
    pub fn frame(&self) -> u64 {
        self.dispatcher.frame()
    }

    //--- Per-Frame Entry Points -------------------------------------------

    /// Runs one update-only pass with the host's clock deltas.
    pub fn tick(&mut self, deltas: FrameDeltas) {
        self.dispatcher
            .run_pass(&mut self.context, deltas, RenderPhase::Skip);
    }

    /// Runs one update pass followed by the render phase.
    pub fn tick_and_render(&mut self, deltas: FrameDeltas) {
        self.dispatcher
            .run_pass(&mut self.context, deltas, RenderPhase::Run);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
