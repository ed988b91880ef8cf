//=========================================================================
// Scriptable Runtime — Library Root
//
// This crate defines the public API surface of the scriptable-variable
// runtime.
//
// Responsibilities:
// - Expose the runtime entry point (`Engine` / `EngineBuilder`)
// - Expose the variable system (shared cells, null-safe bindings) and
//   the behavior layer they are consumed from
// - Provide clean separation between the high-level engine facade
//   and the subsystems it drives
//
// Typical usage:
// ```no_run
// use scriptable_runtime::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the runtime subsystems (variables, behaviors, context).
// It is exposed publicly so hosts can drive the behavior layer from
// their own update loops, but standalone applications will mostly use
// the top-level `Engine` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the runtime entry point and the host control surface.
//
mod engine;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the engine types as the main entry point for applications.
// This allows users to simply `use scriptable_runtime::EngineBuilder;`
// without having to know the internal module structure.
//
pub use engine::{Engine, EngineBuilder, ShutdownHandle};
