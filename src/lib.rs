//=========================================================================
// Cadence Engine — Library Root
//
// This crate defines the public API surface of the Cadence dispatch
// core.
//
// Responsibilities:
// - Expose the per-frame entry point (`Runtime`) the host calls
// - Expose the extension surface (`System`, `SystemRegistry`) used to
//   add and remove per-frame systems at runtime
// - Keep the built-in game systems behind the `game` module so hosts
//   can install all of them or pick individually
//
// Typical usage:
// ```no_run
// use cadence_engine::game::GameSystems;
// use cadence_engine::prelude::*;
//
// # struct MyBridge;
// # impl HostBridge for MyBridge {
// #     fn advance_simulation(&mut self, _: f32, _: f32) {}
// #     fn render_frame(&mut self) {}
// #     fn spawn_object(&mut self, _: f32, _: f32, _: f32) -> Result<(), BridgeError> { Ok(()) }
// #     fn move_object(&mut self, _: usize, _: f32, _: f32, _: f32) -> Result<(), BridgeError> { Ok(()) }
// #     fn move_camera(&mut self, _: f32, _: f32, _: f32) {}
// #     fn read_mode(&self) -> Result<ModeToken, BridgeError> { Ok(ModeToken::from("attract")) }
// #     fn write_mode(&mut self, _: ModeToken) -> Result<(), BridgeError> { Ok(()) }
// #     fn poll_key(&self, _: KeyCode) -> bool { false }
// # }
// let mut runtime = RuntimeBuilder::new(MyBridge).build();
// runtime.init(|registry| {
//     GameSystems::new().install(Some(registry));
// });
// loop {
//     let deltas = FrameDeltas::new(0.016, 0.016);
//     runtime.tick_and_render(deltas);
//     # break;
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the dispatch machinery: clocks, triggers, the system
// registry, the dispatcher, the host bridge, and hot-reload support. It
// is exposed publicly for extensibility, but normal host code will
// mostly use the top-level `Runtime` facade.
//
// `game` contains the built-in systems and their installer.
//
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `runtime` defines the host-facing facade and its builder.
//
mod runtime;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the runtime entry points so hosts can simply
// `use cadence_engine::Runtime;` without knowing the module structure.
//
pub use runtime::{Runtime, RuntimeBuilder};
