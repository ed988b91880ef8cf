//=========================================================================
// Behavior System
//=========================================================================
//
// Host-style lifecycle components ticked by the runtime loop.
//
// Architecture:
//   BehaviorManager
//     └─ behaviors: Vec<(label, Box<dyn Behavior>)>
//
// Flow:
//   start() → Behavior::on_start()   (once, before the first tick)
//   update() → Behavior::update()    (every tick, registration order)
//   stop() → Behavior::on_stop()     (once, after the last tick)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::RuntimeContext;

//=== Module Declarations =================================================

mod behavior_manager;

//=== Public API ==========================================================

pub use behavior_manager::BehaviorManager;

//=== Behavior Trait ======================================================

/// Defines component behavior with lifecycle hooks and update logic.
///
/// Behaviors are registered in BehaviorManager and driven by the
/// runtime loop. They are constructed on the runtime thread and never
/// leave it, so they are free to hold `Binding` and `SharedVariable`
/// handles (which are not Send).
///
/// # Minimal Implementation
///
/// Only `update()` is required. Lifecycle hooks have default empty
/// implementations:
///
/// ```
/// use scriptable_runtime::core::behavior::Behavior;
/// use scriptable_runtime::core::RuntimeContext;
///
/// struct Spinner;
///
/// impl Behavior for Spinner {
///     fn update(&mut self, _context: &mut RuntimeContext) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Behavior {
    /// Called once before the first update.
    ///
    /// Default implementation does nothing. Override to look up shared
    /// variables and construct bindings.
    fn on_start(&mut self, _context: &mut RuntimeContext) {}

    /// Called every tick while the runtime is running.
    fn update(&mut self, context: &mut RuntimeContext);

    /// Called once when the runtime loop exits.
    ///
    /// Default implementation does nothing. Override to flush or log
    /// final state.
    fn on_stop(&mut self, _context: &mut RuntimeContext) {}
}
