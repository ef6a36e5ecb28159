//=========================================================================
// Game Systems
//=========================================================================
//
// The built-in per-frame systems and the controller that wires them up.
//
// Architecture:
//   GameSystems ──install()──> SystemRegistry     (normal path)
//                         └──> DirectDriver       (fallback path)
//
// Priorities:
//   0   host_driver     (Dual)    — relays the pass into the host
//   10  render_toggle   (System)  — F1 render on/off, hot-reloadable
//   15  mode_switch     (System)  — F2 one-shot mode transition
//   20  object_spawner  (Game)    — spawn every 240 frames
//   30  object_mover    (Game)    — move every 120 frames
//   40  camera_shaker   (System)  — shake every 360 frames
//
// The fallback path exists for hosts without a registry: detected once
// at install time, never re-probed per frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::bridge::{KeyCode, ModeToken};
use crate::core::clock::{FrameDeltas, Tick};
use crate::core::context::FrameContext;
use crate::core::dispatch::RenderPhase;
use crate::core::registry::{SystemDescriptor, SystemId, SystemRegistry};
use crate::core::reload::ReloadStamp;

//=== Module Declarations =================================================

mod camera_shaker;
mod host_driver;
mod mode_switch;
mod mover;
mod render_toggle;
mod spawner;

//=== Public API ==========================================================

pub use camera_shaker::CameraShaker;
pub use host_driver::HostDriver;
pub use mode_switch::ModeSwitch;
pub use mover::ObjectMover;
pub use render_toggle::{RenderToggle, ToggleLogic};
pub use spawner::ObjectSpawner;

/// Registry ids of the built-in systems.
pub mod ids {
    pub const HOST_DRIVER: &str = "host_driver";
    pub const RENDER_TOGGLE: &str = "render_toggle";
    pub const MODE_SWITCH: &str = "mode_switch";
    pub const OBJECT_SPAWNER: &str = "object_spawner";
    pub const OBJECT_MOVER: &str = "object_mover";
    pub const CAMERA_SHAKER: &str = "camera_shaker";
}

//=== GameSystems =========================================================

/// Builder and installer for the built-in system set.
///
/// Owns the reload stamp handed to hot-reloadable systems; keep a clone
/// via [`reload_stamp`](Self::reload_stamp) and bump it after reloading
/// an implementation.
pub struct GameSystems {
    reload_stamp: ReloadStamp,
    toggle_key: KeyCode,
    mode_key: KeyCode,
    spawn_interval: u64,
    move_interval: u64,
    shake_interval: u64,
}

impl GameSystems {
    //--- Construction -----------------------------------------------------

    /// Creates the default system set: F1 render toggle, F2 mode switch,
    /// spawn/move/shake every 240/120/360 frames.
    pub fn new() -> Self {
        Self {
            reload_stamp: ReloadStamp::new(),
            toggle_key: KeyCode::F1,
            mode_key: KeyCode::F2,
            spawn_interval: 240,
            move_interval: 120,
            shake_interval: 360,
        }
    }

    /// Rebinds the render toggle key.
    pub fn with_toggle_key(mut self, key: KeyCode) -> Self {
        self.toggle_key = key;
        self
    }

    /// Rebinds the mode switch key.
    pub fn with_mode_key(mut self, key: KeyCode) -> Self {
        self.mode_key = key;
        self
    }

    /// Overrides the spawn interval in frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_spawn_interval(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Spawn interval must be positive");
        self.spawn_interval = frames;
        self
    }

    /// Overrides the move interval in frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_move_interval(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Move interval must be positive");
        self.move_interval = frames;
        self
    }

    /// Overrides the shake interval in frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames == 0`.
    pub fn with_shake_interval(mut self, frames: u64) -> Self {
        assert!(frames > 0, "Shake interval must be positive");
        self.shake_interval = frames;
        self
    }

    /// The stamp hot-reloadable systems watch. Bump it after reloading
    /// an implementation.
    pub fn reload_stamp(&self) -> ReloadStamp {
        self.reload_stamp.clone()
    }

    //--- Installation -----------------------------------------------------

    /// Installs the systems into the host's registry, or falls back to a
    /// direct sequential driver when the host offers none.
    ///
    /// The missing-registry case is detected here, exactly once; the
    /// returned driver never re-probes for a registry per frame.
    pub fn install(self, registry: Option<&mut SystemRegistry>) -> InstallMode {
        let systems = self.descriptors();

        match registry {
            Some(registry) => {
                for (id, descriptor) in systems {
                    registry.register(id, descriptor);
                }
                info!("Game systems registered with host registry");
                InstallMode::Registered
            }
            None => {
                warn!("Host does not support system registration, using direct dispatch");
                InstallMode::Direct(DirectDriver::new(systems))
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn descriptors(self) -> Vec<(SystemId, SystemDescriptor)> {
        vec![
            (
                ids::HOST_DRIVER.into(),
                SystemDescriptor::new(0, HostDriver),
            ),
            (
                ids::RENDER_TOGGLE.into(),
                SystemDescriptor::new(
                    10,
                    RenderToggle::new(self.toggle_key, self.reload_stamp.clone()),
                ),
            ),
            (
                ids::MODE_SWITCH.into(),
                SystemDescriptor::new(
                    15,
                    ModeSwitch::new(
                        self.mode_key,
                        ModeToken::from("attract"),
                        ModeToken::from("playing"),
                    ),
                ),
            ),
            (
                ids::OBJECT_SPAWNER.into(),
                SystemDescriptor::new(20, ObjectSpawner::new(self.spawn_interval)),
            ),
            (
                ids::OBJECT_MOVER.into(),
                SystemDescriptor::new(30, ObjectMover::new(0, self.move_interval)),
            ),
            (
                ids::CAMERA_SHAKER.into(),
                SystemDescriptor::new(40, CameraShaker::new(self.shake_interval, 0.2)),
            ),
        ]
    }
}

impl Default for GameSystems {
    fn default() -> Self {
        Self::new()
    }
}

//=== InstallMode =========================================================

/// How the game systems ended up being dispatched.
pub enum InstallMode {
    /// Systems live in the host registry; the dispatcher drives them.
    Registered,

    /// No registry available; drive this instead, once per frame.
    Direct(DirectDriver),
}

//=== DirectDriver ========================================================

/// Sequential fallback dispatcher for registry-less hosts.
///
/// Invokes the installed systems in fixed priority order with the same
/// per-pass semantics as the real dispatcher. Registry commands queued
/// by systems have no registry to land in and are dropped.
pub struct DirectDriver {
    systems: Vec<(SystemId, SystemDescriptor)>,
    frame: u64,
}

impl DirectDriver {
    fn new(mut systems: Vec<(SystemId, SystemDescriptor)>) -> Self {
        // Stable sort: equal priorities keep installation order.
        systems.sort_by_key(|(_, descriptor)| descriptor.priority);
        Self { systems, frame: 0 }
    }

    /// The frame counter of the next pass.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ids of the driven systems, in dispatch order.
    pub fn ids(&self) -> Vec<SystemId> {
        self.systems.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Runs one sequential pass, mirroring the dispatcher contract.
    pub fn run_pass(
        &mut self,
        context: &mut FrameContext,
        deltas: FrameDeltas,
        render: RenderPhase,
    ) {
        context.frame = self.frame;

        for (_, descriptor) in self.systems.iter_mut() {
            if !descriptor.enabled {
                continue;
            }
            let tick = Tick::new(self.frame, deltas, descriptor.clock_policy());
            descriptor.system_mut().update(context, tick);
        }

        if render == RenderPhase::Run {
            for (_, descriptor) in self.systems.iter_mut() {
                if !descriptor.enabled {
                    continue;
                }
                descriptor.system_mut().render(context);
            }
        }

        let dropped = context.commands.take();
        if !dropped.is_empty() {
            debug!(
                "Dropped {} registry command(s): no registry in direct mode",
                dropped.len()
            );
        }

        self.frame += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::testing::{BridgeCall, RecordingBridge};
    use crate::core::dispatch::Dispatcher;

    fn setup() -> (Dispatcher, FrameContext, RecordingBridge, ReloadStamp) {
        let systems = GameSystems::new()
            .with_spawn_interval(4)
            .with_move_interval(2)
            .with_shake_interval(6);
        let stamp = systems.reload_stamp();

        let mut dispatcher = Dispatcher::new();
        let mode = systems.install(Some(dispatcher.registry_mut()));
        assert!(matches!(mode, InstallMode::Registered));

        let bridge = RecordingBridge::new();
        let context = FrameContext::new(Box::new(bridge.clone()), true);
        (dispatcher, context, bridge, stamp)
    }

    //--- Installation -----------------------------------------------------

    #[test]
    fn install_registers_all_systems_in_priority_order() {
        let (mut dispatcher, _ctx, _bridge, _stamp) = setup();

        assert_eq!(
            dispatcher.registry_mut().ids(),
            vec![
                ids::HOST_DRIVER,
                ids::RENDER_TOGGLE,
                ids::MODE_SWITCH,
                ids::OBJECT_SPAWNER,
                ids::OBJECT_MOVER,
                ids::CAMERA_SHAKER,
            ]
        );
    }

    #[test]
    fn install_without_registry_yields_direct_driver() {
        let mode = GameSystems::new().install(None);
        let InstallMode::Direct(driver) = mode else {
            panic!("expected direct fallback");
        };

        assert_eq!(
            driver.ids(),
            vec![
                ids::HOST_DRIVER,
                ids::RENDER_TOGGLE,
                ids::MODE_SWITCH,
                ids::OBJECT_SPAWNER,
                ids::OBJECT_MOVER,
                ids::CAMERA_SHAKER,
            ]
        );
    }

    #[test]
    fn direct_driver_runs_the_same_systems() {
        let InstallMode::Direct(mut driver) =
            GameSystems::new().with_spawn_interval(2).install(None)
        else {
            panic!("expected direct fallback");
        };

        let bridge = RecordingBridge::new();
        let mut ctx = FrameContext::new(Box::new(bridge.clone()), true);

        for _ in 0..3 {
            driver.run_pass(&mut ctx, FrameDeltas::new(0.016, 0.016), RenderPhase::Run);
        }

        assert_eq!(driver.frame(), 3);
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Advance { .. })),
            3
        );
        assert_eq!(bridge.count_calls(|c| *c == BridgeCall::Render), 3);
        // Spawn interval 2: frames 0 and 2.
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Spawn { .. })),
            2
        );
    }

    //--- Dispatched Behavior ----------------------------------------------

    #[test]
    fn periodic_systems_fire_on_their_intervals() {
        let (mut dispatcher, mut ctx, bridge, _stamp) = setup();

        for _ in 0..9 {
            dispatcher.run_pass(&mut ctx, FrameDeltas::new(0.016, 0.016), RenderPhase::Skip);
        }

        // Spawn interval 4 → frames 0, 4, 8; move interval 2 → 0, 2, 4,
        // 6, 8; shake interval 6 → 0, 6.
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Spawn { .. })),
            3
        );
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Move { .. })),
            5
        );
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Camera { .. })),
            2
        );
    }

    #[test]
    fn render_toggle_suppresses_host_render() {
        let (mut dispatcher, mut ctx, bridge, _stamp) = setup();
        let deltas = FrameDeltas::new(0.016, 0.016);

        dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Run);
        assert_eq!(bridge.count_calls(|c| *c == BridgeCall::Render), 1);

        bridge.press(KeyCode::F1);
        dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Run);
        // The toggle ran before the render phase of the same pass.
        assert_eq!(bridge.count_calls(|c| *c == BridgeCall::Render), 1);
        assert!(!ctx.render_enabled);
    }

    #[test]
    fn paused_pass_still_advances_host_and_input() {
        let (mut dispatcher, mut ctx, bridge, _stamp) = setup();

        bridge.press(KeyCode::F2);
        dispatcher.run_pass(&mut ctx, FrameDeltas::paused(0.016), RenderPhase::Skip);

        // The host driver forwarded the frozen game clock verbatim.
        assert_eq!(
            bridge.calls().first(),
            Some(&BridgeCall::Advance {
                game: 0.0,
                system: 0.016
            })
        );
        // The mode switch still fired while paused.
        assert_eq!(bridge.mode(), Some(ModeToken::from("playing")));
    }

    #[test]
    fn disabling_input_by_id_stops_the_toggle() {
        let (mut dispatcher, mut ctx, bridge, _stamp) = setup();
        let deltas = FrameDeltas::new(0.016, 0.016);

        dispatcher
            .registry_mut()
            .set_enabled(ids::RENDER_TOGGLE, false);
        bridge.press(KeyCode::F1);
        dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Skip);
        assert!(ctx.render_enabled);

        dispatcher
            .registry_mut()
            .set_enabled(ids::RENDER_TOGGLE, true);
        dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Skip);
        assert!(!ctx.render_enabled);
    }

    #[test]
    fn hot_reload_preserves_spawn_cadence() {
        let (mut dispatcher, mut ctx, bridge, stamp) = setup();
        let deltas = FrameDeltas::new(0.016, 0.016);

        for _ in 0..3 {
            dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Skip);
        }
        let spawns_before = bridge.count_calls(|c| matches!(c, BridgeCall::Spawn { .. }));

        // Reload the toggle implementation mid-run.
        stamp.bump();

        for _ in 0..6 {
            dispatcher.run_pass(&mut ctx, deltas, RenderPhase::Skip);
        }

        // Spawn interval 4 over frames 0..9: firings at 0, 4, 8 whether
        // or not a reload happened in between.
        assert_eq!(spawns_before, 1);
        assert_eq!(
            bridge.count_calls(|c| matches!(c, BridgeCall::Spawn { .. })),
            3
        );
    }
}
